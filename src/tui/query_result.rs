//! Applies finished backend results to the application state.

use crate::core::notation;

use super::app::{App, QueryStatus, ScrollPosition};
use super::constants;
use super::handlers::QueryOutcome;

/// Process a finished query: append the assistant turn and update status.
///
/// On failure the transcript still gains a turn, carrying the generic
/// message; the raw error goes to the diagnostic panel and the log.
pub(super) fn handle_query_outcome(app: &mut App, outcome: QueryOutcome) {
    match outcome.result {
        Ok(answer) => {
            app.push_assistant(notation::normalize(&answer));
            app.status = QueryStatus::Done {
                elapsed: outcome.elapsed,
            };
            app.diagnostic = None;
            app.show_diagnostic = false;
        }
        Err(e) => {
            log::warn!("query failed: {}", e);
            app.push_assistant(constants::QUERY_ERROR_TEXT.to_string());
            app.status = QueryStatus::Failed {
                elapsed: outcome.elapsed,
            };
            app.diagnostic = Some(e.to_string());
        }
    }
    app.scroll = ScrollPosition::Bottom;
}

/// Process the startup probe: show the model name, or the error text in
/// its place. Either way the session stays usable.
pub(super) fn handle_probe_result(app: &mut App, result: Result<String, String>) {
    match result {
        Ok(model) => {
            app.model_display = Some(model);
            app.probe_failed = false;
        }
        Err(e) => {
            log::warn!("status probe failed: {}", e);
            app.model_display = Some(format!("Error: {}", e));
            app.probe_failed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::core::backend::BackendError;
    use crate::core::transcript::Role;

    fn outcome(result: Result<String, BackendError>) -> QueryOutcome {
        QueryOutcome {
            result,
            elapsed: Duration::from_millis(1234),
        }
    }

    #[test]
    fn success_appends_normalized_assistant_turn() {
        let mut app = App::new();
        app.push_user("What is $x^2$?".to_string());

        handle_query_outcome(&mut app, outcome(Ok(r"It is \(x \cdot x\).".to_string())));

        let turns = app.transcript.all();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[1].content, r"It is $x \cdot x$.");
        assert!(matches!(app.status, QueryStatus::Done { .. }));
        assert!(app.diagnostic.is_none());
    }

    #[test]
    fn timeout_records_exactly_one_generic_assistant_turn() {
        let mut app = App::new();
        app.push_user("slow question".to_string());

        handle_query_outcome(&mut app, outcome(Err(BackendError::Timeout)));

        let turns = app.transcript.all();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[1].role, Role::Assistant);
        assert_eq!(turns[1].content, constants::QUERY_ERROR_TEXT);
        assert!(matches!(app.status, QueryStatus::Failed { .. }));
        // Raw error is surfaced in the diagnostic area, not the transcript.
        assert_eq!(app.diagnostic.as_deref(), Some("request timed out"));
    }

    #[test]
    fn failure_then_success_keeps_conversation_consistent() {
        let mut app = App::new();
        app.push_user("q1".to_string());
        handle_query_outcome(&mut app, outcome(Err(BackendError::Timeout)));
        app.push_user("q2".to_string());
        handle_query_outcome(&mut app, outcome(Ok("a2".to_string())));

        let roles: Vec<Role> = app.transcript.all().iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![Role::User, Role::Assistant, Role::User, Role::Assistant]
        );
        assert!(app.diagnostic.is_none());
    }

    #[test]
    fn probe_success_sets_model_name() {
        let mut app = App::new();
        handle_probe_result(&mut app, Ok("l4tr-mini-v2".to_string()));
        assert_eq!(app.model_display.as_deref(), Some("l4tr-mini-v2"));
        assert!(!app.probe_failed);
    }

    #[test]
    fn probe_failure_shows_error_in_place_of_model() {
        let mut app = App::new();
        handle_probe_result(&mut app, Err("connection refused".to_string()));
        assert_eq!(
            app.model_display.as_deref(),
            Some("Error: connection refused")
        );
        assert!(app.probe_failed);
    }
}
