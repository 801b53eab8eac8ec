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

use crate::combobox::{Combobox, EventOutcome};
use crate::config::ComboboxOptions;
use crate::dom::{Document, HostEvent, NodeId};
use crate::error::ComboboxError;
use crate::nav::{CommitOutcome, Direction, NavigateOutcome};
use std::collections::HashMap;

/// Per-control combobox state keyed by the control's node.
///
/// Operations on a control that is not installed are no-ops and report
/// `None`/`false`.
#[derive(Debug, Default)]
pub struct ComboboxRegistry {
    entries: HashMap<NodeId, Combobox>,
}

impl ComboboxRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the attribute contract on `control` for `list`. A control that
    /// is already installed is uninstalled first.
    pub fn install(
        &mut self,
        doc: &mut Document,
        control: NodeId,
        list: NodeId,
        options: ComboboxOptions,
    ) -> Result<(), ComboboxError> {
        if self.entries.contains_key(&control) {
            tracing::debug!(%control, "re-installing combobox");
            self.uninstall(doc, control);
        }
        let combobox = Combobox::new(doc, control, list, options)?;
        self.entries.insert(control, combobox);
        Ok(())
    }

    pub fn uninstall(&mut self, doc: &mut Document, control: NodeId) -> bool {
        let Some(combobox) = self.entries.remove(&control) else {
            return false;
        };
        combobox.destroy(doc);
        true
    }

    pub fn start(&mut self, doc: &mut Document, control: NodeId) -> bool {
        let Some(c) = self.entries.get_mut(&control) else {
            return false;
        };
        c.start(doc);
        true
    }

    pub fn stop(&mut self, doc: &mut Document, control: NodeId) -> bool {
        let Some(c) = self.entries.get_mut(&control) else {
            return false;
        };
        c.stop(doc);
        true
    }

    pub fn navigate(
        &mut self,
        doc: &mut Document,
        control: NodeId,
        direction: Direction,
    ) -> Option<NavigateOutcome> {
        self.entries.get_mut(&control).map(|c| c.navigate(doc, direction))
    }

    pub fn clear_selection(&self, doc: &mut Document, control: NodeId) -> bool {
        let Some(c) = self.entries.get(&control) else {
            return false;
        };
        c.clear_selection(doc);
        true
    }

    pub fn commit(&self, doc: &mut Document, control: NodeId) -> Option<CommitOutcome> {
        self.entries.get(&control).map(|c| c.commit(doc))
    }

    /// Deliver a host event addressed to `control`.
    pub fn dispatch(
        &mut self,
        doc: &mut Document,
        control: NodeId,
        event: &HostEvent,
    ) -> EventOutcome {
        self.entries.get_mut(&control).map(|c| c.handle_event(doc, event)).unwrap_or_default()
    }

    /// Deliver a click to whichever active combobox owns the list it landed in.
    pub fn dispatch_click(&mut self, doc: &mut Document, event: &HostEvent) -> EventOutcome {
        let HostEvent::Click(pointer) = event else {
            return EventOutcome::default();
        };
        let owner = self
            .entries
            .values_mut()
            .find(|c| c.is_active() && doc.is_inclusive_ancestor(c.list(), pointer.target));
        owner.map(|c| c.handle_event(doc, event)).unwrap_or_default()
    }

    pub fn get(&self, control: NodeId) -> Option<&Combobox> {
        self.entries.get(&control)
    }

    pub fn is_installed(&self, control: NodeId) -> bool {
        self.entries.contains_key(&control)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
