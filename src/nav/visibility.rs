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

use crate::dom::{Document, NodeId};

/// Whether `option` is a legal navigation target: not `hidden`, not an
/// `<input type=hidden>`, and rendered with a nonzero width or height.
///
/// Disabled options are navigable; they are only excluded from commit.
pub fn is_navigable(doc: &Document, option: NodeId) -> bool {
    let Some(el) = doc.element(option) else {
        return false;
    };
    !el.hidden && !el.is_hidden_input() && !el.layout.is_empty()
}
