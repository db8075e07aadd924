//! Event handlers for the TUI: keyboard input and background request plumbing.

mod query_spawn;

pub(super) use query_spawn::{PendingQuery, QueryOutcome, spawn_query, spawn_status_probe};

use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::runtime::Runtime;

use crate::core::backend::BackendClient;
use crate::core::notation;

use super::app::{App, QueryStatus, ScrollPosition};
use super::constants;
use super::shortcuts::Shortcut;

/// Result of handling an event: continue the loop or exit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
}

/// Handle a key event.
///
/// While a query is in flight the session blocks: view-only keys (scroll,
/// diagnostic toggle, quit) still work, but input editing, submit, and
/// clear chat are ignored until the result arrives.
pub(super) fn handle_key(
    key: KeyEvent,
    app: &mut App,
    backend: &Arc<BackendClient>,
    pending_query: &mut Option<PendingQuery>,
    rt: &Arc<Runtime>,
) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    match Shortcut::match_key(&key) {
        Some(Shortcut::Quit) => return HandleResult::Break,
        Some(Shortcut::ClearChat) => {
            if pending_query.is_none() {
                app.clear_chat();
            }
            return HandleResult::Continue;
        }
        Some(Shortcut::ToggleDiagnostic) => {
            if app.diagnostic.is_some() {
                app.show_diagnostic = !app.show_diagnostic;
            }
            return HandleResult::Continue;
        }
        None => {}
    }

    match key.code {
        KeyCode::Up => {
            app.scroll_up(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        KeyCode::Down => {
            app.scroll_down(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        KeyCode::PageUp => {
            app.scroll_up(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        KeyCode::PageDown => {
            app.scroll_down(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        KeyCode::Enter => {
            if pending_query.is_none() {
                submit_prompt(app, backend, pending_query, rt);
            }
            HandleResult::Continue
        }
        KeyCode::Backspace => {
            if pending_query.is_none() {
                app.input.pop();
            }
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            // Ignore Alt+key: user likely intended a shortcut
            if key.modifiers.contains(KeyModifiers::ALT) {
                return HandleResult::Continue;
            }
            if pending_query.is_none() {
                app.input.push(c);
            }
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

/// Append the normalized user turn, then send the raw prompt plus the full
/// transcript (including that turn) to the backend on a background thread.
fn submit_prompt(
    app: &mut App,
    backend: &Arc<BackendClient>,
    pending_query: &mut Option<PendingQuery>,
    rt: &Arc<Runtime>,
) {
    let raw = app.input.trim().to_string();
    if raw.is_empty() {
        return;
    }
    app.input.clear();
    app.push_user(notation::normalize(&raw));
    app.status = QueryStatus::Thinking {
        started: Instant::now(),
    };
    app.diagnostic = None;
    app.show_diagnostic = false;
    app.scroll = ScrollPosition::Bottom;

    *pending_query = Some(spawn_query(
        rt,
        Arc::clone(backend),
        raw,
        app.transcript.all().to_vec(),
    ));
}
