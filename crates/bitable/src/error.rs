//! Error types for the Bitable client.

use thiserror::Error;

/// Errors that can occur when talking to the Bitable API.
#[derive(Debug, Error)]
pub enum BitableError {
    /// Token exchange failed (network error, bad status, or a response
    /// without the expected token field).
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// Record search returned a non-2xx HTTP response.
    #[error("search request failed with status {status}: {body}")]
    Fetch { status: u16, body: String },

    /// The API answered 2xx but reported a non-zero status code.
    #[error("API error {code}: {msg}")]
    Api { code: i64, msg: String },

    /// HTTP transport failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}
