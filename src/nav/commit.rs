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

use super::options::{is_disabled, option_containing};
use super::selection;
use super::visibility::is_navigable;
use crate::dom::{Document, NodeId, Notification, NotificationKind, PointerEvent};

/// Result of an acceptance gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Nothing selected and no default option.
    NotCommitted,
    /// The target is disabled: the keypress is consumed but nothing happens.
    Swallowed(NodeId),
    /// `target` was activated and the commit notification dispatched.
    /// `vetoed` is set when a listener prevented the default action.
    Committed { target: NodeId, vetoed: bool },
}

impl CommitOutcome {
    /// Whether the triggering key's default behaviour should be suppressed.
    #[must_use]
    pub const fn committed(self) -> bool {
        !matches!(self, Self::NotCommitted)
    }

    #[must_use]
    pub const fn target(self) -> Option<NodeId> {
        match self {
            Self::NotCommitted => None,
            Self::Swallowed(target) | Self::Committed { target, .. } => Some(target),
        }
    }
}

/// Keyboard acceptance: activate the selected option, or the default option
/// when nothing is selected.
pub fn commit(doc: &mut Document, container: NodeId) -> CommitOutcome {
    let target =
        selection::current(doc, container).or_else(|| selection::default_option(doc, container));
    let Some(target) = target else {
        tracing::debug!(%container, "commit with nothing selected");
        return CommitOutcome::NotCommitted;
    };
    if is_disabled(doc, target) {
        tracing::warn!(%target, "commit target is disabled; swallowing keypress");
        return CommitOutcome::Swallowed(target);
    }

    // The simulated activation runs first so host handlers (checkbox proxies,
    // links) have applied their state by the time the commit listeners run.
    let activation = doc.dispatch(Notification::new(NotificationKind::Activate, target));
    let vetoed = fire_commit(doc, target, None) || activation.default_prevented();
    CommitOutcome::Committed { target, vetoed }
}

/// Pointer acceptance: commit whichever option the click landed in, bypassing
/// the selection. Returns `None` when the click is not on an eligible option.
pub fn commit_pointer(
    doc: &mut Document,
    container: NodeId,
    pointer: PointerEvent,
) -> Option<CommitOutcome> {
    let target = option_containing(doc, container, pointer.target)?;
    if !is_navigable(doc, target) || is_disabled(doc, target) {
        tracing::trace!(%target, "click on ineligible option ignored");
        return None;
    }
    let vetoed = fire_commit(doc, target, Some(pointer));
    Some(CommitOutcome::Committed { target, vetoed })
}

/// Dispatch the cancelable commit notification; true when a listener vetoed it.
fn fire_commit(doc: &mut Document, target: NodeId, pointer: Option<PointerEvent>) -> bool {
    let notification = doc
        .dispatch(Notification::new(NotificationKind::Commit, target).with_pointer(pointer));
    tracing::debug!(%target, vetoed = notification.default_prevented(), "option committed");
    notification.default_prevented()
}
