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

use super::{Document, NodeId};
use crossterm::event::{KeyEvent, KeyModifiers};

/// Input delivered by the host to a control (or, for clicks, its list).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    Key(KeyEvent),
    CompositionStart,
    CompositionEnd,
    /// The control's content changed.
    Input,
    Click(PointerEvent),
}

/// Primary pointer activation on `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub target: NodeId,
    pub modifiers: KeyModifiers,
}

impl PointerEvent {
    #[must_use]
    pub const fn new(target: NodeId) -> Self {
        Self { target, modifiers: KeyModifiers::NONE }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// An option was accepted. Cancelable.
    Commit,
    /// The active option changed. Informational.
    Select,
    /// Simulated primary activation of an element.
    Activate,
}

impl NotificationKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Commit => "combobox-commit",
            Self::Select => "combobox-select",
            Self::Activate => "click",
        }
    }

    #[must_use]
    pub const fn cancelable(self) -> bool {
        matches!(self, Self::Commit | Self::Activate)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u64);

/// A notification travelling from `target` towards the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub target: NodeId,
    /// Node whose listeners are currently running.
    pub current_target: NodeId,
    /// Originating pointer event for pointer commits.
    pub pointer: Option<PointerEvent>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Notification {
    #[must_use]
    pub const fn new(kind: NotificationKind, target: NodeId) -> Self {
        Self {
            kind,
            target,
            current_target: target,
            pointer: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    #[must_use]
    pub const fn with_pointer(mut self, pointer: Option<PointerEvent>) -> Self {
        self.pointer = pointer;
        self
    }

    #[must_use]
    pub const fn cancelable(&self) -> bool {
        self.kind.cancelable()
    }

    /// No effect on non-cancelable notifications.
    pub fn prevent_default(&mut self) {
        if self.cancelable() {
            self.default_prevented = true;
        }
    }

    #[must_use]
    pub const fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }
}

impl Document {
    /// Run listeners from the target up through its ancestors and hand the
    /// finished notification back so callers can inspect cancellation.
    pub fn dispatch(&mut self, mut notification: Notification) -> Notification {
        tracing::trace!(
            kind = notification.kind.name(),
            target = %notification.target,
            "dispatching notification"
        );
        let kind = notification.kind;
        for node in self.ancestors_inclusive(notification.target) {
            notification.current_target = node;
            for listener in self.listeners.iter_mut().filter(|l| l.node == node && l.kind == kind) {
                (listener.callback)(&mut notification);
            }
            if notification.propagation_stopped {
                break;
            }
        }
        notification
    }
}
