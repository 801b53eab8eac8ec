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

use super::attrs;
use super::visibility::is_navigable;
use crate::dom::{Document, Element, NodeId};

pub fn is_option(el: &Element) -> bool {
    el.attribute(attrs::ROLE) == Some(attrs::ROLE_OPTION)
}

pub fn is_disabled(doc: &Document, option: NodeId) -> bool {
    doc.attribute(option, attrs::ARIA_DISABLED) == Some("true")
}

/// Every option under `container`, navigable or not, in document order.
pub fn all_options(doc: &Document, container: NodeId) -> Vec<NodeId> {
    doc.descendants(container)
        .into_iter()
        .filter(|n| doc.element(*n).is_some_and(is_option))
        .collect()
}

/// Navigable options under `container`, in document order.
///
/// Always computed from the current tree, never cached, so hosts can add and
/// remove options between interactions without telling anyone.
pub fn list_options(doc: &Document, container: NodeId) -> Vec<NodeId> {
    all_options(doc, container).into_iter().filter(|n| is_navigable(doc, *n)).collect()
}

/// Resolve `node` to the option containing it, if that option lives in `container`.
pub fn option_containing(doc: &Document, container: NodeId, node: NodeId) -> Option<NodeId> {
    let option = doc.closest(node, is_option)?;
    (option != container && doc.is_inclusive_ancestor(container, option)).then_some(option)
}

/// Return the element's id, assigning a fresh one when it has none.
pub fn ensure_id(doc: &mut Document, node: NodeId, prefix: &str) -> String {
    if let Some(id) = doc.element(node).and_then(Element::id) {
        return id.to_owned();
    }
    let id = generate_id(doc, prefix);
    doc.set_attribute(node, attrs::ID, id.clone());
    id
}

/// Short-id draws before falling back to a full uuid suffix.
const SHORT_ID_ATTEMPTS: usize = 16;

/// `<prefix>-<4 digits>` from random entropy, not yet used by any element in
/// `doc`. Falls back to a full uuid suffix when short ids keep colliding.
pub fn generate_id(doc: &Document, prefix: &str) -> String {
    for _ in 0..SHORT_ID_ATTEMPTS {
        let suffix = uuid::Uuid::new_v4().as_u128() % 10_000;
        let id = format!("{prefix}-{suffix:04}");
        if doc.element_by_id(&id).is_none() {
            return id;
        }
    }
    let id = format!("{prefix}-{}", uuid::Uuid::new_v4().simple());
    tracing::debug!(%id, "short ids exhausted; using a full uuid");
    id
}
