// combobox_nav — Keyboard and pointer option picking for combobox/listbox pairs
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use super::DemoApp;
use crate::dom::NodeId;
use crate::nav::{attrs, options, selection};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

const ACCENT: Color = Color::Rgb(244, 118, 0);
const DIM: Color = Color::DarkGray;
const PROMPT_CHAR: &str = "❯";

fn areas(area: Rect, app: &DemoApp) -> [Rect; 4] {
    let list_rows = u16::try_from(app.doc.client_height(app.list)).unwrap_or(u16::MAX);
    Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(list_rows.saturating_add(2)),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// List area inside its border.
pub fn list_inner_area(area: Rect, app: &DemoApp) -> Rect {
    let [_, list, _, _] = areas(area, app);
    Block::default().borders(Borders::ALL).inner(list)
}

/// Options with a rendered row inside the list's current scroll window.
pub fn visible_rows(app: &DemoApp) -> Vec<NodeId> {
    let top = app.doc.scroll_top(app.list);
    let bottom = top + app.doc.client_height(app.list);
    options::all_options(&app.doc, app.list)
        .into_iter()
        .filter(|n| {
            let layout = app.doc.layout(*n);
            layout.height > 0 && layout.offset_top >= top && layout.bottom() <= bottom
        })
        .collect()
}

fn option_line(app: &DemoApp, option: NodeId) -> Line<'static> {
    let label = app.doc.text(option).to_owned();
    let disabled = options::is_disabled(&app.doc, option);
    if selection::is_selected(&app.doc, option) {
        let style = if disabled {
            Style::default().fg(DIM).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        };
        return Line::from(vec![Span::styled(" \u{25b8} ", style), Span::styled(label, style)]);
    }
    let mut spans = vec![Span::raw("   ")];
    if disabled {
        spans.push(Span::styled(label, Style::default().fg(DIM)));
    } else {
        spans.push(Span::raw(label));
    }
    if app.doc.has_attribute(option, attrs::DEFAULT_OPTION) {
        spans.push(Span::styled("  (default)", Style::default().fg(DIM)));
    }
    Line::from(spans)
}

pub fn render(frame: &mut Frame, app: &DemoApp) {
    let [input_area, list_area, log_area, status_area] = areas(frame.area(), app);

    let active = app.doc.attribute(app.control, attrs::ARIA_ACTIVEDESCENDANT).unwrap_or("none");
    let input = Paragraph::new(Line::from(vec![
        Span::styled(format!("{PROMPT_CHAR} "), Style::default().fg(ACCENT)),
        Span::raw(app.doc.text(app.control).to_owned()),
    ]))
    .block(
        Block::default()
            .title(Span::styled(format!(" active: {active} "), Style::default().fg(DIM)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(input, input_area);

    let total = options::list_options(&app.doc, app.list).len();
    let lines: Vec<Line<'static>> =
        visible_rows(app).into_iter().map(|option| option_line(app, option)).collect();
    let list = Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(format!(" Options ({total}) "), Style::default().fg(DIM)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(DIM)),
    );
    frame.render_widget(list, list_area);

    let log: Vec<Line<'static>> = app
        .committed_labels()
        .into_iter()
        .rev()
        .map(|label| Line::from(vec![Span::styled("✓ ", Style::default().fg(ACCENT)), Span::raw(label)]))
        .collect();
    frame.render_widget(
        Paragraph::new(log).block(Block::default().title(" Committed ").borders(Borders::TOP)),
        log_area,
    );

    frame.render_widget(
        Paragraph::new(Span::styled(app.status.clone(), Style::default().fg(DIM))),
        status_area,
    );
}
