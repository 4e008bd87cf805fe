//! Durable key-value session persistence.
//!
//! Mirrors the in-memory session into storage after every successful
//! sign-in/sign-out. The store is write-through only: nothing reads the
//! persisted session back at startup, so a fresh launch always requires a
//! new sign-in.

mod file;
mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use thiserror::Error;

/// Storage keys for persisted session data.
pub mod keys {
    /// Key holding the raw bearer credential.
    pub const AUTH_TOKEN: &str = "@auth_token";

    /// Key holding the JSON-serialized user profile.
    pub const AUTH_USER: &str = "@auth_user";
}

/// Errors that can occur reading or writing the session store.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// Underlying file I/O failed.
    #[error("session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data could not be encoded or decoded.
    #[error("session storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable string key-value storage for session data.
///
/// Writes are overwrite-by-key; the two session keys are written in
/// sequence, not as one atomic unit. A crash between the two writes can
/// leave them inconsistent, which is acceptable because the next sign-in
/// overwrites both.
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, SessionStoreError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn put(
        &self,
        key: &str,
        value: &str,
    ) -> impl Future<Output = Result<(), SessionStoreError>> + Send;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), SessionStoreError>> + Send;
}
