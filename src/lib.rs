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

pub mod combobox;
pub mod config;
pub mod demo;
pub mod dom;
pub mod error;
pub mod nav;
pub mod registry;

pub use combobox::{Combobox, ControlKind, EventOutcome, Lifecycle};
pub use config::{ComboboxOptions, ScrollAlignment};
pub use dom::{Document, HostEvent, NodeId, Notification, NotificationKind, PointerEvent};
pub use error::ComboboxError;
pub use nav::{CommitOutcome, Direction, NavigateOutcome};
pub use registry::ComboboxRegistry;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "combobox-nav-demo", about = "Drive a combobox over an in-memory list in the terminal")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Option label (repeatable). Defaults to a small robot roster.
    #[arg(long = "option", value_name = "LABEL")]
    pub options: Vec<String>,

    /// Mark an option as disabled (repeatable)
    #[arg(long = "disabled", value_name = "LABEL")]
    pub disabled: Vec<String>,

    /// Load combobox options from a JSON file; flags below override it
    #[arg(long, value_name = "PATH")]
    pub config: Option<std::path::PathBuf>,

    /// Do not commit on Tab
    #[arg(long)]
    pub no_tab_commit: bool,

    /// Commit the first enabled option when nothing is selected
    #[arg(long)]
    pub default_first: bool,

    /// How the active option is scrolled into view
    #[arg(long, value_enum)]
    pub align: Option<ScrollAlignment>,

    /// Enable Ctrl+N / Ctrl+P regardless of platform
    #[arg(long)]
    pub secondary_bindings: bool,

    /// Number of list rows visible at once
    #[arg(long, default_value_t = 5)]
    pub rows: u16,

    /// Write tracing diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (falls back to `RUST_LOG`, then `info`)
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}

impl Cli {
    /// Resolve combobox options: config file first, then flag overrides.
    pub fn combobox_options(&self) -> Result<ComboboxOptions, ComboboxError> {
        let mut options = match &self.config {
            Some(path) => ComboboxOptions::from_json_file(path)?,
            None => ComboboxOptions::default(),
        };
        if self.no_tab_commit {
            options.allow_tab_commit = false;
        }
        if self.default_first {
            options.default_first_option = true;
        }
        if let Some(align) = self.align {
            options.scroll_alignment = align;
        }
        if self.secondary_bindings {
            options.secondary_bindings = Some(true);
        }
        Ok(options)
    }
}
