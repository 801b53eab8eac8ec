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

//! Navigation and selection core: everything here reads and writes the
//! document directly and keeps no state of its own.

pub mod attrs;
pub mod commit;
pub mod keys;
pub mod navigate;
pub mod options;
pub mod platform;
pub mod selection;
pub mod visibility;

pub use commit::CommitOutcome;
pub use keys::{KeyBindings, KeyCommand};
pub use navigate::{Direction, NavigateOutcome};
