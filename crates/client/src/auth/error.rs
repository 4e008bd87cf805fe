//! Authentication error types.

use thiserror::Error;

use crate::session::SessionStoreError;

/// Errors that can occur during authentication operations.
///
/// At the UI boundary, `Rejected` and `Http` are presented the same way (an
/// inline message near the login form): a failed fetch cannot reliably be
/// told apart from rejected credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Credentials rejected or server-side validation failed. The message
    /// is the server-provided error string when present, otherwise a
    /// generic fallback carrying the HTTP status.
    #[error("{0}")]
    Rejected(String),

    /// Network-level failure reaching the auth endpoint.
    #[error("network error during authentication: {0}")]
    Http(#[from] reqwest::Error),

    /// Server replied with a success status but an unusable body.
    #[error("malformed auth response: {0}")]
    MalformedResponse(String),

    /// Persisting or clearing the session mirror failed.
    #[error("session persistence failed: {0}")]
    Store(#[from] SessionStoreError),
}
