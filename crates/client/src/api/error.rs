//! REST API error types.

use thiserror::Error;

/// Errors that can occur when calling the events backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure.
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status. The message is the server's
    /// `error` string when present, otherwise a generic status fallback.
    #[error("{message} (status {status})")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Server-provided or fallback message.
        message: String,
    },

    /// Success status with an unusable body.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// A registration needs at least one participant with a name.
    #[error("at least one named participant is required")]
    NoParticipants,
}
