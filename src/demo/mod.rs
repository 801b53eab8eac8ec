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

//! Terminal host for a single combobox: the terminal plays the browser,
//! forwarding keys and clicks and rendering the document's state.

pub mod ui;

use crate::Cli;
use crate::combobox::EventOutcome;
use crate::dom::{Document, HostEvent, NodeId, NotificationKind, PointerEvent};
use crate::error::ComboboxError;
use crate::nav::{CommitOutcome, attrs};
use crate::registry::ComboboxRegistry;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use ratatui::layout::Rect;
use std::cell::RefCell;
use std::rc::Rc;

const DEFAULT_OPTIONS: [&str; 6] = ["Baymax", "BB-8", "Hubot", "R2-D2", "Johnny 5", "Wall-E"];

/// Rendered width given to every option row.
const ROW_WIDTH: u32 = 40;

pub struct DemoApp {
    pub doc: Document,
    pub registry: ComboboxRegistry,
    pub control: NodeId,
    pub list: NodeId,
    /// Targets of every commit notification, oldest first.
    pub committed: Rc<RefCell<Vec<NodeId>>>,
    pub status: String,
    pub should_quit: bool,
    /// Terminal area of the last frame, for mouse hit-testing.
    pub frame_area: Rect,
}

fn slug(label: &str, index: usize) -> String {
    let base: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("{base}-{index}")
}

/// Build the demo document and install an active combobox on it.
pub fn build_app(cli: &Cli) -> Result<DemoApp, ComboboxError> {
    let options = cli.combobox_options()?;
    let mut doc = Document::new();
    let root = doc.root();
    let control = doc.build("input").id("demo-input").append_to(root);
    let list = doc.build("ul").append_to(root);

    let labels: Vec<&str> = if cli.options.is_empty() {
        DEFAULT_OPTIONS.to_vec()
    } else {
        cli.options.iter().map(String::as_str).collect()
    };
    for (index, label) in labels.into_iter().enumerate() {
        let option =
            doc.build("li").id(&slug(label, index)).role(attrs::ROLE_OPTION).text(label).append_to(list);
        if cli.disabled.iter().any(|d| d == label) {
            doc.set_attribute(option, attrs::ARIA_DISABLED, "true");
        }
    }
    doc.stack_layout(list, 1, ROW_WIDTH);
    doc.set_client_height(list, u32::from(cli.rows.max(1)));

    let committed = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&committed);
    doc.add_listener(root, NotificationKind::Commit, move |n| sink.borrow_mut().push(n.target));

    let mut registry = ComboboxRegistry::new();
    registry.install(&mut doc, control, list, options)?;
    registry.start(&mut doc, control);
    doc.focus(control);

    Ok(DemoApp {
        doc,
        registry,
        control,
        list,
        committed,
        status: "↑/↓ move · Enter commit · Esc clear · Ctrl+Q quit".to_owned(),
        should_quit: false,
        frame_area: Rect::default(),
    })
}

impl DemoApp {
    pub fn committed_labels(&self) -> Vec<String> {
        self.committed.borrow().iter().map(|n| self.doc.text(*n).to_owned()).collect()
    }

    fn input_text(&self) -> &str {
        self.doc.text(self.control)
    }

    fn edit_input(&mut self, edit: impl FnOnce(&mut String)) {
        let mut text = self.input_text().to_owned();
        edit(&mut text);
        self.doc.set_text(self.control, text);
        self.registry.dispatch(&mut self.doc, self.control, &HostEvent::Input);
    }

    fn report(&mut self, outcome: EventOutcome) {
        let Some(commit) = outcome.commit else {
            return;
        };
        self.status = match commit {
            CommitOutcome::NotCommitted => "Nothing selected".to_owned(),
            CommitOutcome::Swallowed(target) => format!("{} is disabled", self.doc.text(target)),
            CommitOutcome::Committed { target, vetoed: false } => {
                format!("Committed {}", self.doc.text(target))
            }
            CommitOutcome::Committed { target, vetoed: true } => {
                format!("Commit of {} was vetoed", self.doc.text(target))
            }
        };
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&'q') || c.eq_ignore_ascii_case(&'c'))
}

pub fn handle_terminal_event(app: &mut DemoApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
            if let Some(target) = option_at(app, mouse.column, mouse.row) {
                let click = HostEvent::Click(PointerEvent { target, modifiers: mouse.modifiers });
                let outcome = app.registry.dispatch_click(&mut app.doc, &click);
                app.report(outcome);
            }
        }
        _ => {}
    }
}

fn handle_key(app: &mut DemoApp, key: KeyEvent) {
    if is_quit_key(key) {
        app.should_quit = true;
        return;
    }
    let outcome = app.registry.dispatch(&mut app.doc, app.control, &HostEvent::Key(key));
    app.report(outcome);
    if outcome.prevent_default {
        return;
    }

    // Default behaviour of a single-line text field.
    let plain = !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Char(c) if plain => app.edit_input(|text| text.push(c)),
        KeyCode::Backspace => app.edit_input(|text| {
            text.pop();
        }),
        _ => {}
    }
}

/// Option rendered at terminal cell (`column`, `row`), if any.
fn option_at(app: &DemoApp, column: u16, row: u16) -> Option<NodeId> {
    let inner = ui::list_inner_area(app.frame_area, app);
    if column < inner.x || column >= inner.right() || row < inner.y || row >= inner.bottom() {
        return None;
    }
    let offset = app.doc.scroll_top(app.list) + u32::from(row - inner.y);
    ui::visible_rows(app).into_iter().find(|n| app.doc.layout(*n).offset_top == offset)
}

pub fn run(app: &mut DemoApp) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();
    let _ = crossterm::execute!(std::io::stdout(), EnableMouseCapture);

    let result = event_loop(&mut terminal, app);

    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut DemoApp) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| {
            app.frame_area = frame.area();
            ui::render(frame, app);
        })?;
        let event = crossterm::event::read()?;
        handle_terminal_event(app, event);
    }
    tracing::info!(committed = ?app.committed_labels(), "demo finished");
    Ok(())
}
