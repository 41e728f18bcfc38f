use reqwest::StatusCode;
use thiserror::Error;

/// Login/refresh failures surfaced by the session manager.
///
/// A refresh failure additionally clears the session: failing to logged-out
/// beats holding a token that is about to die.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("login request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("login failed with status {0}")]
    Status(StatusCode),

    #[error("No token received from server")]
    MissingToken,
}

/// Content-fetch failures surfaced by the carousel service.
///
/// The cache record is never touched on any of these; stale content, if
/// present, stays readable.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("content request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("content fetch failed with status {0}")]
    Status(StatusCode),

    #[error("Invalid response format: expected array")]
    InvalidFormat,

    #[error("failed to decode content response: {0}")]
    Decode(#[from] serde_json::Error),
}
