//! Pluggable auth backing strategy.
//!
//! The session manager talks to exactly one backend behind this interface:
//! [`super::RemoteAuthBackend`] in real builds, [`super::StaticAuthBackend`]
//! for offline development and tests.

use secrecy::SecretString;

use encontro_core::UserProfile;

use super::error::AuthError;

/// Outcome of a successful login: the normalized profile and the issued
/// bearer credential, always produced together.
#[derive(Debug)]
pub struct LoginSuccess {
    /// Normalized user profile.
    pub user: UserProfile,
    /// Opaque bearer token issued by the backend.
    pub token: SecretString,
}

/// Backing strategy for authentication.
pub trait AuthBackend: Send + Sync {
    /// Exchange credentials for a profile and bearer token.
    fn login(
        &self,
        email: &str,
        password: &SecretString,
    ) -> impl Future<Output = Result<LoginSuccess, AuthError>> + Send;

    /// Invalidate the bearer token server-side. Best-effort: callers absorb
    /// failures and clear local state regardless.
    fn logout(&self, token: &SecretString) -> impl Future<Output = Result<(), AuthError>> + Send;
}
