//! TUI application state: transcript, input, scroll, query status.

use std::time::{Duration, Instant};

use crate::core::transcript::{Role, Transcript};

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ScrollPosition {
    Line(usize),
    Bottom,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::Line(0)
    }
}

/// Lifecycle of the current (or most recent) query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    Idle,
    /// A request is in flight; prompts are blocked until it resolves.
    Thinking { started: Instant },
    Done { elapsed: Duration },
    Failed { elapsed: Duration },
}

/// Session-scoped UI state, owned by the event loop and passed by reference
/// to handlers. Lifecycle: created at TUI start, reset by clear chat,
/// dropped when the session ends.
pub struct App {
    /// Chat history for this session.
    pub(crate) transcript: Transcript,
    /// User input in the text field.
    pub(crate) input: String,
    pub(crate) scroll: ScrollPosition,
    pub(crate) last_max_scroll: usize,
    /// Model name from the startup probe, or the probe's error text.
    pub(crate) model_display: Option<String>,
    /// True when `model_display` holds an error rather than a model name.
    pub(crate) probe_failed: bool,
    pub(crate) status: QueryStatus,
    /// Raw error from the last failed query, shown in the diagnostic panel.
    pub(crate) diagnostic: Option<String>,
    /// Diagnostic panel expanded (Ctrl+E).
    pub(crate) show_diagnostic: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            input: String::new(),
            scroll: ScrollPosition::default(),
            last_max_scroll: 0,
            model_display: None,
            probe_failed: false,
            status: QueryStatus::Idle,
            diagnostic: None,
            show_diagnostic: false,
        }
    }

    pub(crate) fn push_user(&mut self, content: String) {
        self.transcript.append(Role::User, content);
    }

    pub(crate) fn push_assistant(&mut self, content: String) {
        self.transcript.append(Role::Assistant, content);
    }

    pub(crate) fn is_thinking(&self) -> bool {
        matches!(self.status, QueryStatus::Thinking { .. })
    }

    /// Reset to an empty conversation. Model display survives; it belongs
    /// to the backend, not the conversation.
    pub(crate) fn clear_chat(&mut self) {
        self.transcript.reset();
        self.status = QueryStatus::Idle;
        self.diagnostic = None;
        self.show_diagnostic = false;
        self.scroll = ScrollPosition::default();
        self.last_max_scroll = 0;
    }

    /// Must be called before scroll_up/scroll_down when at bottom.
    pub(crate) fn materialize_scroll(&mut self) {
        if self.scroll == ScrollPosition::Bottom {
            self.scroll = ScrollPosition::Line(self.last_max_scroll);
        }
    }

    pub(crate) fn scroll_down(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line((pos + n).min(self.last_max_scroll));
        }
    }

    pub(crate) fn scroll_up(&mut self, n: usize) {
        self.materialize_scroll();
        if let ScrollPosition::Line(pos) = self.scroll {
            self.scroll = ScrollPosition::Line(pos.saturating_sub(n));
        }
    }

    /// Resolve scroll position to a concrete line index.
    pub(crate) fn scroll_line(&self) -> usize {
        match self.scroll {
            ScrollPosition::Line(n) => n.min(self.last_max_scroll),
            ScrollPosition::Bottom => self.last_max_scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transcript::Role;

    #[test]
    fn push_user_and_assistant_append_in_order() {
        let mut app = App::new();
        app.push_user("question".to_string());
        app.push_assistant("answer".to_string());
        let turns = app.transcript.all();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[1].role, Role::Assistant);
    }

    #[test]
    fn clear_chat_resets_everything_but_model() {
        let mut app = App::new();
        app.model_display = Some("l4tr-mini".to_string());
        app.push_user("q".to_string());
        app.status = QueryStatus::Failed {
            elapsed: Duration::from_secs(1),
        };
        app.diagnostic = Some("boom".to_string());
        app.show_diagnostic = true;

        app.clear_chat();

        assert!(app.transcript.is_empty());
        assert_eq!(app.status, QueryStatus::Idle);
        assert!(app.diagnostic.is_none());
        assert!(!app.show_diagnostic);
        assert_eq!(app.model_display.as_deref(), Some("l4tr-mini"));
    }

    #[test]
    fn scroll_clamps_to_bounds() {
        let mut app = App::new();
        app.last_max_scroll = 10;
        app.scroll = ScrollPosition::Line(0);
        app.scroll_up(5);
        assert_eq!(app.scroll_line(), 0);
        app.scroll_down(100);
        assert_eq!(app.scroll_line(), 10);
    }

    #[test]
    fn scroll_from_bottom_materializes() {
        let mut app = App::new();
        app.last_max_scroll = 20;
        app.scroll = ScrollPosition::Bottom;
        app.scroll_up(3);
        assert_eq!(app.scroll_line(), 17);
    }
}
