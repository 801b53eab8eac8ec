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

use std::sync::OnceLock;

static SECONDARY_BINDINGS: OnceLock<bool> = OnceLock::new();

/// Whether the platform conventionally binds Ctrl+N / Ctrl+P to next/previous
/// line (macOS). Detected once per process.
pub fn secondary_bindings_detected() -> bool {
    *SECONDARY_BINDINGS.get_or_init(|| {
        let detected = cfg!(target_os = "macos");
        tracing::debug!(detected, "secondary key bindings");
        detected
    })
}
