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

//! Attribute names making up the control/option contract.

pub const ID: &str = "id";
pub const ROLE: &str = "role";
pub const ROLE_COMBOBOX: &str = "combobox";
pub const ROLE_OPTION: &str = "option";

pub const ARIA_CONTROLS: &str = "aria-controls";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_AUTOCOMPLETE: &str = "aria-autocomplete";
pub const ARIA_HASPOPUP: &str = "aria-haspopup";
pub const ARIA_ACTIVEDESCENDANT: &str = "aria-activedescendant";
pub const ARIA_SELECTED: &str = "aria-selected";
pub const ARIA_DISABLED: &str = "aria-disabled";

/// Marks the option a commit falls back to while nothing is selected.
pub const DEFAULT_OPTION: &str = "data-combobox-option-default";

/// Attributes set on the control at install time, removed again on uninstall.
pub const CONTROL_CONTRACT: [&str; 5] =
    [ROLE, ARIA_CONTROLS, ARIA_EXPANDED, ARIA_AUTOCOMPLETE, ARIA_HASPOPUP];
