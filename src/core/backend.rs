//! HTTP client for the question-answering backend.
//!
//! Two endpoints: `GET <base>/` reports the model in use, `POST <base>/query`
//! answers a prompt given the full transcript. Every request carries the
//! `x-api-key` header. The backend applies its own context-window
//! truncation, so the full transcript is always sent.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::config::Config;
use crate::core::transcript::Turn;

const API_KEY_HEADER: &str = "x-api-key";

/// Timeout for the startup status probe.
pub const STATUS_TIMEOUT: Duration = Duration::from_secs(60);

/// Timeout for a query request. Only the timeout terminates an issued
/// request; there is no user-initiated abort.
pub const QUERY_TIMEOUT: Duration = Duration::from_secs(120);

/// Placeholder answer when a 2xx query body has no `response` field.
pub const EMPTY_RESPONSE_TEXT: &str = "No response";

/// Errors from talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request timed out")]
    Timeout,
    #[error("{0}")]
    Http(reqwest::Error),
    #[error("backend returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Map a transport error, distinguishing timeouts from other failures.
fn map_request_error(e: reqwest::Error) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout
    } else {
        BackendError::Http(e)
    }
}

fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(BackendError::Status(status))
    }
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    model: String,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    response: Option<String>,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    prompt: &'a str,
    messages: &'a [Turn],
}

/// Parse the status endpoint body into the served model name.
fn parse_status_body(body: &str) -> Result<String, BackendError> {
    let parsed: StatusResponse = serde_json::from_str(body)?;
    Ok(parsed.model)
}

/// Parse the query endpoint body. A 2xx body without `response` means the
/// backend had nothing to return; that maps to a placeholder, not an error.
fn parse_query_body(body: &str) -> Result<String, BackendError> {
    let parsed: QueryResponse = serde_json::from_str(body)?;
    Ok(parsed
        .response
        .unwrap_or_else(|| EMPTY_RESPONSE_TEXT.to_string()))
}

/// Client for the two backend endpoints.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch the name of the model serving the backend (`GET <base>/`).
    pub async fn status(&self) -> Result<String, BackendError> {
        let resp = self
            .http
            .get(&self.base_url)
            .header(API_KEY_HEADER, &self.api_key)
            .timeout(STATUS_TIMEOUT)
            .send()
            .await
            .map_err(map_request_error)?;
        let body = check_status(resp)?
            .text()
            .await
            .map_err(map_request_error)?;
        parse_status_body(&body)
    }

    /// Ask the backend a question (`POST <base>/query`).
    ///
    /// `prompt` is the raw user input; `messages` is the full displayed
    /// transcript including the just-appended user turn.
    pub async fn query(&self, prompt: &str, messages: &[Turn]) -> Result<String, BackendError> {
        let url = format!("{}query", self.base_url);
        log::debug!("query: POST {} ({} transcript turns)", url, messages.len());
        let resp = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .timeout(QUERY_TIMEOUT)
            .json(&QueryRequest { prompt, messages })
            .send()
            .await
            .map_err(map_request_error)?;
        let body = check_status(resp)?
            .text()
            .await
            .map_err(map_request_error)?;
        parse_query_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transcript::Role;

    #[test]
    fn parse_status_body_extracts_model() {
        assert_eq!(
            parse_status_body(r#"{"model": "l4tr-mini-v2"}"#).unwrap(),
            "l4tr-mini-v2"
        );
    }

    #[test]
    fn parse_status_body_rejects_missing_field() {
        let err = parse_status_body(r#"{"name": "nope"}"#).unwrap_err();
        assert!(matches!(err, BackendError::Malformed(_)));
    }

    #[test]
    fn parse_status_body_rejects_non_json() {
        let err = parse_status_body("<html>502</html>").unwrap_err();
        assert!(matches!(err, BackendError::Malformed(_)));
    }

    #[test]
    fn parse_query_body_extracts_response() {
        assert_eq!(
            parse_query_body(r#"{"response": "The answer is $42$."}"#).unwrap(),
            "The answer is $42$."
        );
    }

    #[test]
    fn parse_query_body_missing_response_uses_placeholder() {
        assert_eq!(parse_query_body("{}").unwrap(), EMPTY_RESPONSE_TEXT);
    }

    #[test]
    fn query_request_wire_shape() {
        let messages = vec![Turn {
            role: Role::User,
            content: "What is $x^2$?".to_string(),
        }];
        let req = QueryRequest {
            prompt: r"What is \(x^2\)?",
            messages: &messages,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "prompt": r"What is \(x^2\)?",
                "messages": [{"role": "user", "content": "What is $x^2$?"}]
            })
        );
    }
}
