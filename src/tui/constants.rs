//! TUI constants: colors, timing, and user-facing status text.

use ratatui::style::Color;

/// Accent gold color (#FABD2F).
pub(super) const ACCENT: Color = Color::Rgb(250, 189, 47);

/// Secondary accent — soft cyan (#7EC8E3) for assistant labels.
pub(super) const ACCENT_SECONDARY: Color = Color::Rgb(126, 200, 227);

/// Event poll timeout in milliseconds (main loop).
pub(crate) const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Scroll amount for arrow keys.
pub(crate) const SCROLL_LINES_SMALL: usize = 3;

/// Scroll amount for PageUp/PageDown.
pub(crate) const SCROLL_LINES_PAGE: usize = 10;

/// Input box height (single input line plus block borders).
pub(crate) const INPUT_LINES: u16 = 3;

/// Height of the diagnostic panel when expanded (borders included).
pub(crate) const DIAGNOSTIC_LINES: u16 = 6;

/// Spinner frames for the "thinking" animation (braille pattern, 4 frames).
pub(super) const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸"];

/// Milliseconds per spinner frame.
pub(super) const SPINNER_FRAME_MS: u128 = 150;

/// Generic user-facing text stored in the transcript when a query fails.
/// The raw error goes to the diagnostic panel, not the transcript.
pub(crate) const QUERY_ERROR_TEXT: &str = "An error occurred, please try again later.";
