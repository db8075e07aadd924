//! Centralized keyboard shortcuts.
//!
//! | Action           | Keys                  |
//! |------------------|-----------------------|
//! | Send             | Enter                 |
//! | Scroll           | ↑ ↓ PageUp PageDown   |
//! | Clear chat       | Ctrl+N                |
//! | Error details    | Ctrl+E                |
//! | Quit             | Ctrl+C                |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Clear the chat transcript (Ctrl+N)
    ClearChat,
    /// Toggle the error diagnostic panel (Ctrl+E)
    ToggleDiagnostic,
    /// Quit (Ctrl+C)
    Quit,
}

impl Shortcut {
    /// Returns the shortcut if the key matches.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::Quit)
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::ClearChat)
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Shortcut::ToggleDiagnostic)
            }
            _ => None,
        }
    }
}
