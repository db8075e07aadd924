//! Backend connection settings, loaded once at startup.

use std::env;

/// Connection settings for the question-answering backend.
///
/// Built once by [`load`] and passed to whichever component issues
/// outbound requests; nothing else reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend, always ending in `/`.
    pub base_url: String,
    /// Value for the `x-api-key` header attached to every request.
    pub api_key: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("API_KEY is not set")]
    MissingApiKey,
}

/// Load configuration from environment. Returns an error if the API key is missing.
pub fn load() -> Result<Config, ConfigError> {
    let api_key = env::var("API_KEY").map_err(|_| ConfigError::MissingApiKey)?;

    Ok(Config {
        base_url: base_url(),
        api_key,
    })
}

/// Backend base URL from `API_URL`, normalized, with the local default.
pub fn base_url() -> String {
    let url = env::var("API_URL").unwrap_or_else(|_| "http://localhost:8000/".to_string());
    normalize_base_url(&url)
}

/// True when `API_KEY` is present in the environment.
pub fn api_key_is_set() -> bool {
    env::var("API_KEY").is_ok()
}

/// Ensure the base URL ends with `/` so endpoint paths can be appended directly.
fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}
