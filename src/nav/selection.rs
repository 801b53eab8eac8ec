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

//! The active-option state, stored entirely in the document.
//!
//! "Selected" is `aria-selected="true"`; "not selected" is the attribute's
//! absence. At most one option under a container carries the selected flag,
//! and while one does the control's `aria-activedescendant` names it.

use super::attrs;
use super::options::{all_options, ensure_id, is_disabled, list_options};
use super::visibility::is_navigable;
use crate::dom::{Document, Element, NodeId};

pub fn is_selected(doc: &Document, option: NodeId) -> bool {
    doc.attribute(option, attrs::ARIA_SELECTED) == Some("true")
}

/// First navigable option marked selected. Extra marks are tolerated; the
/// first one in document order wins.
pub fn current(doc: &Document, container: NodeId) -> Option<NodeId> {
    let mut marked = all_options(doc, container)
        .into_iter()
        .filter(|n| is_selected(doc, *n) && is_navigable(doc, *n));
    let first = marked.next();
    if first.is_some() && marked.next().is_some() {
        tracing::warn!(%container, "more than one option marked selected; using the first");
    }
    first
}

/// Make `option` the single selected option and point the control at it.
/// Returns true when `option` had no id and one was generated for it.
pub fn set(doc: &mut Document, control: NodeId, container: NodeId, option: NodeId) -> bool {
    let generated = doc.element(option).and_then(Element::id).is_none();
    let id = ensure_id(doc, option, "combobox-option");
    for node in all_options(doc, container) {
        if node == option {
            doc.set_attribute(node, attrs::ARIA_SELECTED, "true");
        } else {
            doc.remove_attribute(node, attrs::ARIA_SELECTED);
        }
        doc.remove_attribute(node, attrs::DEFAULT_OPTION);
    }
    doc.set_attribute(control, attrs::ARIA_ACTIVEDESCENDANT, id);
    generated
}

/// Unselect everything. With `mark_default`, the first navigable enabled
/// option becomes the commit fallback.
pub fn clear(doc: &mut Document, control: NodeId, container: NodeId, mark_default: bool) {
    doc.remove_attribute(control, attrs::ARIA_ACTIVEDESCENDANT);
    for node in all_options(doc, container) {
        doc.remove_attribute(node, attrs::ARIA_SELECTED);
        doc.remove_attribute(node, attrs::DEFAULT_OPTION);
    }
    if mark_default && let Some(first) = first_eligible(doc, container) {
        doc.set_attribute(first, attrs::DEFAULT_OPTION, "");
    }
}

/// Remove default markers without touching the selection.
pub fn clear_default(doc: &mut Document, container: NodeId) {
    for node in all_options(doc, container) {
        doc.remove_attribute(node, attrs::DEFAULT_OPTION);
    }
}

/// The option currently carrying the default marker, if still navigable.
pub fn default_option(doc: &Document, container: NodeId) -> Option<NodeId> {
    list_options(doc, container)
        .into_iter()
        .find(|n| doc.has_attribute(*n, attrs::DEFAULT_OPTION))
}

fn first_eligible(doc: &Document, container: NodeId) -> Option<NodeId> {
    list_options(doc, container).into_iter().find(|n| !is_disabled(doc, *n))
}
