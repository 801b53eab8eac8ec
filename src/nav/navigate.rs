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

use super::options::list_options;
use super::selection;
use crate::config::ScrollAlignment;
use crate::dom::{Document, NodeId, Notification, NotificationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// What a navigation step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigateOutcome {
    /// No navigable options.
    Empty,
    /// Moved past the first/last option: selection cleared, focus back on the control.
    Cleared,
    Selected(NodeId),
}

/// Move the active option one step in `direction`.
///
/// Past either end the selection is cleared instead of wrapping; the next
/// step then starts over from the matching end, and with `mark_default` the
/// first enabled option becomes the commit fallback again. Options that had
/// to be given an id are pushed onto `generated_ids`.
pub fn navigate(
    doc: &mut Document,
    control: NodeId,
    container: NodeId,
    direction: Direction,
    alignment: ScrollAlignment,
    mark_default: bool,
    generated_ids: &mut Vec<NodeId>,
) -> NavigateOutcome {
    let els = list_options(doc, container);
    let Some(last) = els.len().checked_sub(1) else {
        return NavigateOutcome::Empty;
    };
    let position =
        selection::current(doc, container).and_then(|cur| els.iter().position(|n| *n == cur));

    let index = match (position, direction) {
        (Some(i), Direction::Forward) if i == last => None,
        (Some(0), Direction::Backward) => None,
        (Some(i), Direction::Forward) => Some(i + 1),
        (Some(i), Direction::Backward) => Some(i - 1),
        (None, Direction::Forward) => Some(0),
        (None, Direction::Backward) => Some(last),
    };

    let Some(index) = index else {
        selection::clear(doc, control, container, mark_default);
        doc.focus(control);
        tracing::debug!(%control, ?direction, "navigated past boundary; selection cleared");
        return NavigateOutcome::Cleared;
    };

    let target = els[index];
    if selection::set(doc, control, container, target) {
        generated_ids.push(target);
    }
    scroll_into_view(doc, container, target, alignment);
    doc.dispatch(Notification::new(NotificationKind::Select, target));
    tracing::debug!(%control, %target, index, ?direction, "navigated");
    NavigateOutcome::Selected(target)
}

/// Adjust `container`'s scroll offset so `target` is fully visible. Leaves it
/// alone when the target already is, or when the container does not scroll.
pub fn scroll_into_view(
    doc: &mut Document,
    container: NodeId,
    target: NodeId,
    alignment: ScrollAlignment,
) {
    let view_height = doc.client_height(container);
    if view_height == 0 {
        return;
    }
    let view_top = doc.scroll_top(container);
    let view_bottom = view_top.saturating_add(view_height);
    let item = doc.layout(target);
    if item.offset_top >= view_top && item.bottom() <= view_bottom {
        return;
    }

    let scroll_top = match alignment {
        ScrollAlignment::Nearest if item.offset_top < view_top => item.offset_top,
        ScrollAlignment::Nearest | ScrollAlignment::End => item.bottom().saturating_sub(view_height),
        ScrollAlignment::Start => item.offset_top,
        ScrollAlignment::Center => {
            (item.offset_top + item.height / 2).saturating_sub(view_height / 2)
        }
    };
    tracing::trace!(%container, %target, scroll_top, "scrolling option into view");
    doc.set_scroll_top(container, scroll_top);
}
