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

use crate::error::ComboboxError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How an option is brought into view inside its scroll container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScrollAlignment {
    /// Scroll the least amount needed to reveal the option.
    #[default]
    Nearest,
    Start,
    End,
    Center,
}

/// Construction-time options for a control/list pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComboboxOptions {
    /// Tab commits the active option like Enter.
    pub allow_tab_commit: bool,
    /// Mark the first enabled option as the commit fallback while nothing is selected.
    pub default_first_option: bool,
    pub scroll_alignment: ScrollAlignment,
    /// Ctrl+N / Ctrl+P navigation. `None` uses the platform default.
    pub secondary_bindings: Option<bool>,
}

impl Default for ComboboxOptions {
    fn default() -> Self {
        Self {
            allow_tab_commit: true,
            default_first_option: false,
            scroll_alignment: ScrollAlignment::Nearest,
            secondary_bindings: None,
        }
    }
}

impl ComboboxOptions {
    pub fn from_json_str(json: &str) -> Result<Self, ComboboxError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ComboboxError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| ComboboxError::ConfigRead { path: path.to_path_buf(), source })?;
        Self::from_json_str(&raw)
    }

    /// Effective secondary-binding switch after platform detection.
    #[must_use]
    pub fn secondary_bindings_enabled(&self) -> bool {
        self.secondary_bindings.unwrap_or_else(crate::nav::platform::secondary_bindings_detected)
    }
}
