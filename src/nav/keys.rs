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

use super::navigate::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the combobox to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Commit; suppress the key's default only if something was committed.
    Commit,
    /// Clear the selection, leaving the key's default behaviour alone.
    Clear,
    /// Move the selection and suppress the key's default.
    Navigate(Direction),
    /// Not ours; the event passes through untouched.
    Ignore,
}

/// Switches that change the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub allow_tab_commit: bool,
    /// Ctrl+N / Ctrl+P navigate.
    pub secondary: bool,
}

const META_LIKE: KeyModifiers =
    KeyModifiers::SUPER.union(KeyModifiers::META).union(KeyModifiers::HYPER);

fn is_secondary_char(code: KeyCode, expected: char) -> bool {
    matches!(code, KeyCode::Char(c) if c == expected)
}

/// Map a key press to a command. Shift, Alt and Meta-like modifiers opt the
/// key out entirely; Ctrl only reaches the secondary bindings.
pub fn interpret(key: KeyEvent, bindings: KeyBindings) -> KeyCommand {
    if key.kind == KeyEventKind::Release {
        return KeyCommand::Ignore;
    }
    let modifiers = key.modifiers;
    if modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT | META_LIKE) {
        return KeyCommand::Ignore;
    }

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            code if bindings.secondary && is_secondary_char(code, 'n') => {
                KeyCommand::Navigate(Direction::Forward)
            }
            code if bindings.secondary && is_secondary_char(code, 'p') => {
                KeyCommand::Navigate(Direction::Backward)
            }
            _ => KeyCommand::Ignore,
        };
    }

    match key.code {
        KeyCode::Enter => KeyCommand::Commit,
        KeyCode::Tab if bindings.allow_tab_commit => KeyCommand::Commit,
        KeyCode::Tab => KeyCommand::Ignore,
        KeyCode::Esc => KeyCommand::Clear,
        KeyCode::Down => KeyCommand::Navigate(Direction::Forward),
        KeyCode::Up => KeyCommand::Navigate(Direction::Backward),
        // Anything else starts an edit of the control's content.
        _ => KeyCommand::Clear,
    }
}
