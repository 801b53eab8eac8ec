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

use crate::config::ComboboxOptions;
use crate::dom::{Document, Element, HostEvent, NodeId};
use crate::error::ComboboxError;
use crate::nav::keys::{self, KeyBindings, KeyCommand};
use crate::nav::options::generate_id;
use crate::nav::{CommitOutcome, Direction, NavigateOutcome, attrs, commit, navigate, selection};

/// Input text types that behave as a single-line text field.
const TEXT_INPUT_TYPES: [&str; 6] = ["text", "search", "email", "url", "tel", "password"];

/// Element kinds a combobox can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    SingleLine,
    MultiLine,
    Editable,
}

impl ControlKind {
    pub fn classify(el: &Element) -> Result<Self, ComboboxError> {
        if let Some(input_type) = el.input_type() {
            if TEXT_INPUT_TYPES.contains(&input_type.as_str()) {
                return Ok(Self::SingleLine);
            }
        } else if el.tag() == "textarea" {
            return Ok(Self::MultiLine);
        } else if el.content_editable {
            return Ok(Self::Editable);
        }
        Err(ComboboxError::UnsupportedElement { tag: el.tag().to_owned() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Attribute contract present, no input handled.
    Installed,
    /// Keyboard, composition, input and click handling bound; expanded.
    Active,
}

/// Effect of a host event on its default behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The host should suppress the event's default action.
    pub prevent_default: bool,
    /// A commit happened (keyboard or pointer).
    pub commit: Option<CommitOutcome>,
}

impl EventOutcome {
    const PASS: Self = Self { prevent_default: false, commit: None };

    const fn consumed() -> Self {
        Self { prevent_default: true, commit: None }
    }
}

/// A control/list pair. Constructing one installs the attribute contract;
/// [`Combobox::start`] binds input handling; [`Combobox::destroy`] undoes all of it.
#[derive(Debug)]
pub struct Combobox {
    control: NodeId,
    list: NodeId,
    kind: ControlKind,
    options: ComboboxOptions,
    bindings: KeyBindings,
    phase: Lifecycle,
    composing: bool,
    /// Control attribute values from before install.
    saved: Vec<(&'static str, Option<String>)>,
    generated_list_id: bool,
    /// Options given an id on selection, with the id they were given.
    generated_option_ids: Vec<(NodeId, String)>,
}

impl Combobox {
    pub fn new(
        doc: &mut Document,
        control: NodeId,
        list: NodeId,
        options: ComboboxOptions,
    ) -> Result<Self, ComboboxError> {
        let el = doc.element(control).ok_or(ComboboxError::MissingNode(control))?;
        let kind = ControlKind::classify(el)?;
        if !doc.contains(list) {
            return Err(ComboboxError::MissingNode(list));
        }

        let saved = attrs::CONTROL_CONTRACT
            .iter()
            .map(|name| (*name, doc.attribute(control, name).map(str::to_owned)))
            .collect();

        let existing_id = doc.element(list).and_then(Element::id).map(str::to_owned);
        let generated_list_id = existing_id.is_none();
        let list_id = existing_id.unwrap_or_else(|| {
            let id = generate_id(doc, "combobox");
            doc.set_attribute(list, attrs::ID, id.clone());
            id
        });

        doc.set_attribute(control, attrs::ROLE, attrs::ROLE_COMBOBOX);
        doc.set_attribute(control, attrs::ARIA_CONTROLS, list_id);
        doc.set_attribute(control, attrs::ARIA_EXPANDED, "false");
        doc.set_attribute(control, attrs::ARIA_AUTOCOMPLETE, "list");
        doc.set_attribute(control, attrs::ARIA_HASPOPUP, "listbox");

        let bindings = KeyBindings {
            allow_tab_commit: options.allow_tab_commit,
            secondary: options.secondary_bindings_enabled(),
        };
        tracing::debug!(%control, %list, ?kind, ?options, "combobox installed");

        Ok(Self {
            control,
            list,
            kind,
            options,
            bindings,
            phase: Lifecycle::Installed,
            composing: false,
            saved,
            generated_list_id,
            generated_option_ids: Vec::new(),
        })
    }

    #[must_use]
    pub const fn control(&self) -> NodeId {
        self.control
    }

    #[must_use]
    pub const fn list(&self) -> NodeId {
        self.list
    }

    #[must_use]
    pub const fn kind(&self) -> ControlKind {
        self.kind
    }

    #[must_use]
    pub const fn phase(&self) -> Lifecycle {
        self.phase
    }

    #[must_use]
    pub const fn options(&self) -> &ComboboxOptions {
        &self.options
    }

    #[must_use]
    pub const fn is_composing(&self) -> bool {
        self.composing
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.phase, Lifecycle::Active)
    }

    pub fn start(&mut self, doc: &mut Document) {
        if self.is_active() {
            return;
        }
        doc.set_attribute(self.control, attrs::ARIA_EXPANDED, "true");
        self.phase = Lifecycle::Active;
        if self.options.default_first_option && selection::current(doc, self.list).is_none() {
            selection::clear(doc, self.control, self.list, true);
        }
        tracing::debug!(control = %self.control, "combobox started");
    }

    pub fn stop(&mut self, doc: &mut Document) {
        selection::clear(doc, self.control, self.list, false);
        doc.set_attribute(self.control, attrs::ARIA_EXPANDED, "false");
        self.phase = Lifecycle::Installed;
        self.composing = false;
        tracing::debug!(control = %self.control, "combobox stopped");
    }

    /// Stop and remove every attribute this combobox added, restoring values
    /// the control carried before install.
    pub fn destroy(mut self, doc: &mut Document) {
        self.stop(doc);
        for (name, previous) in self.saved.drain(..) {
            match previous {
                Some(value) => doc.set_attribute(self.control, name, value),
                None => {
                    doc.remove_attribute(self.control, name);
                }
            }
        }
        if self.generated_list_id {
            doc.remove_attribute(self.list, attrs::ID);
        }
        for (option, id) in self.generated_option_ids.drain(..) {
            // Hosts may have re-labelled the option since.
            if doc.attribute(option, attrs::ID) == Some(id.as_str()) {
                doc.remove_attribute(option, attrs::ID);
            }
        }
        tracing::debug!(control = %self.control, "combobox destroyed");
    }

    pub fn navigate(&mut self, doc: &mut Document, direction: Direction) -> NavigateOutcome {
        let mut generated = Vec::new();
        let outcome = navigate::navigate(
            doc,
            self.control,
            self.list,
            direction,
            self.options.scroll_alignment,
            self.marks_default(),
            &mut generated,
        );
        self.generated_option_ids.extend(
            generated
                .into_iter()
                .filter_map(|n| doc.attribute(n, attrs::ID).map(|id| (n, id.to_owned()))),
        );
        outcome
    }

    pub fn clear_selection(&self, doc: &mut Document) {
        selection::clear(doc, self.control, self.list, self.marks_default());
    }

    /// The default option is only marked while the pair is active.
    const fn marks_default(&self) -> bool {
        self.options.default_first_option && self.is_active()
    }

    pub fn commit(&self, doc: &mut Document) -> CommitOutcome {
        commit::commit(doc, self.list)
    }

    /// Route a host event. Nothing is handled unless the combobox is active.
    pub fn handle_event(&mut self, doc: &mut Document, event: &HostEvent) -> EventOutcome {
        if !self.is_active() {
            return EventOutcome::PASS;
        }
        match event {
            HostEvent::CompositionStart | HostEvent::CompositionEnd => {
                self.track_composition(doc, matches!(event, HostEvent::CompositionStart));
                EventOutcome::PASS
            }
            HostEvent::Input => {
                self.clear_selection(doc);
                EventOutcome::PASS
            }
            HostEvent::Key(key) => self.handle_key(doc, *key),
            HostEvent::Click(pointer) => match commit::commit_pointer(doc, self.list, *pointer) {
                Some(outcome) => EventOutcome {
                    prevent_default: matches!(outcome, CommitOutcome::Committed { vetoed: true, .. }),
                    commit: Some(outcome),
                },
                None => EventOutcome::PASS,
            },
        }
    }

    fn track_composition(&mut self, doc: &mut Document, composing: bool) {
        self.composing = composing;
        tracing::debug!(control = %self.control, composing, "composition changed");
        let owns_list = doc
            .attribute(self.control, attrs::ARIA_CONTROLS)
            .and_then(|id| doc.element_by_id(id))
            .is_some();
        if owns_list {
            self.clear_selection(doc);
        }
    }

    fn handle_key(&mut self, doc: &mut Document, key: crossterm::event::KeyEvent) -> EventOutcome {
        if self.composing {
            tracing::trace!(control = %self.control, ?key, "key ignored while composing");
            return EventOutcome::PASS;
        }
        match keys::interpret(key, self.bindings) {
            KeyCommand::Commit => {
                let outcome = self.commit(doc);
                EventOutcome { prevent_default: outcome.committed(), commit: Some(outcome) }
            }
            KeyCommand::Clear => {
                self.clear_selection(doc);
                EventOutcome::PASS
            }
            KeyCommand::Navigate(direction) => {
                self.navigate(doc, direction);
                EventOutcome::consumed()
            }
            KeyCommand::Ignore => {
                tracing::trace!(control = %self.control, ?key, "key ignored");
                EventOutcome::PASS
            }
        }
    }
}
