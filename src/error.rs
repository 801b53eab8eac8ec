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

use crate::dom::NodeId;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ComboboxError {
    #[error("unsupported element <{tag}>: expected a text input, a textarea, or an editable element")]
    UnsupportedElement { tag: String },
    #[error("node {0} is not part of this document")]
    MissingNode(NodeId),
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl ComboboxError {
    pub const UNSUPPORTED_ELEMENT_EXIT_CODE: i32 = 20;
    pub const MISSING_NODE_EXIT_CODE: i32 = 21;
    pub const CONFIG_EXIT_CODE: i32 = 22;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnsupportedElement { .. } => Self::UNSUPPORTED_ELEMENT_EXIT_CODE,
            Self::MissingNode(_) => Self::MISSING_NODE_EXIT_CODE,
            Self::ConfigRead { .. } | Self::ConfigParse(_) => Self::CONFIG_EXIT_CODE,
        }
    }
}
