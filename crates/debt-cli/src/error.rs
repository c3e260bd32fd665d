//! Error taxonomy surfaced at the interaction boundary.

use thiserror::Error;

/// Errors a single interaction can fail with. Nothing here is fatal to
/// the process and nothing is retried automatically; the user retries
/// manually.
#[derive(Debug, Error)]
pub enum AppError {
    /// Phone number failed the format check (no network call made).
    #[error(transparent)]
    Phone(#[from] debt_core::PhoneError),

    /// Token exchange or record search failed.
    #[error(transparent)]
    Bitable(#[from] bitable::BitableError),

    /// Admin credentials did not match.
    #[error("login failed: wrong username or password")]
    LoginFailed,

    /// Missing or malformed configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
