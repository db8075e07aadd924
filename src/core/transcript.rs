//! Session transcript: the ordered chat history for one session.

use serde::{Deserialize, Serialize};

/// Author of a [`Turn`]. Serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the chat history. Content is the display-formatted text
/// (after notation normalization), not raw model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// Ordered, append-only chat history owned by the current session.
///
/// Created empty at session start; turns are never edited or removed
/// individually. [`Transcript::reset`] clears it wholesale.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn to the end of the history.
    pub fn append(&mut self, role: Role, content: impl Into<String>) {
        self.turns.push(Turn {
            role,
            content: content.into(),
        });
    }

    /// Clear the history. Visible on the next render.
    pub fn reset(&mut self) {
        self.turns.clear();
    }

    /// Ordered turns, for rendering and for inclusion in outbound requests.
    pub fn all(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
