//! Authentication session manager.
//!
//! Owns the single process-wide session (profile + credential + loading
//! flag) and is the only component that mutates it. Screens consume the
//! session read-only through clones of [`AuthSession`].

mod backend;
mod error;
mod remote;
mod static_table;

pub use backend::{AuthBackend, LoginSuccess};
pub use error::AuthError;
pub use remote::RemoteAuthBackend;
pub use static_table::{StaticAccount, StaticAuthBackend};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::RwLock;
use tracing::{instrument, warn};

use encontro_core::UserProfile;

use crate::session::{SessionStore, SessionStoreError, keys};

/// Profile and credential of the signed-in user, held as one unit so they
/// are always set and cleared together.
#[derive(Clone)]
struct Authenticated {
    user: UserProfile,
    token: SecretString,
}

struct AuthSessionInner<B, S> {
    backend: B,
    store: S,
    state: RwLock<Option<Authenticated>>,
    is_loading: AtomicBool,
}

/// Holds the loading flag up for the lifetime of a sign-in call.
///
/// Clearing on `Drop` covers every path out, including the sign-in future
/// being dropped mid-await.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn arm(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Process-wide authentication session manager.
///
/// Exactly one session exists per running process; clones share it. State
/// is mutated only through [`AuthSession::sign_in`] and
/// [`AuthSession::sign_out`].
///
/// # Concurrency
///
/// Overlapping `sign_in` calls are not rejected: both race on the loading
/// flag and the eventual session write, and the last write wins. Callers
/// should disable the submitting control while [`AuthSession::is_loading_auth`]
/// reports true.
pub struct AuthSession<B, S> {
    inner: Arc<AuthSessionInner<B, S>>,
}

impl<B, S> Clone for AuthSession<B, S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B, S> AuthSession<B, S>
where
    B: AuthBackend,
    S: SessionStore,
{
    /// Create a signed-out session over the given backend and store.
    #[must_use]
    pub fn new(backend: B, store: S) -> Self {
        Self {
            inner: Arc::new(AuthSessionInner {
                backend,
                store,
                state: RwLock::new(None),
                is_loading: AtomicBool::new(false),
            }),
        }
    }

    /// Sign in with email and password.
    ///
    /// On success the session holds the normalized profile and the issued
    /// token, both are mirrored into the store under the fixed keys, and
    /// the profile is returned. On failure the in-memory session is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Rejected` when the backend refuses the
    /// credentials, `AuthError::Http` on network failure, and
    /// `AuthError::Store` when mirroring the session fails.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn sign_in(
        &self,
        email: &str,
        password: SecretString,
    ) -> Result<UserProfile, AuthError> {
        let _guard = LoadingGuard::arm(&self.inner.is_loading);
        self.sign_in_inner(email, &password).await
    }

    async fn sign_in_inner(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<UserProfile, AuthError> {
        let success = self.inner.backend.login(email, password).await?;
        let profile = success.user.clone();

        *self.inner.state.write().await = Some(Authenticated {
            user: success.user,
            token: success.token.clone(),
        });

        // Mirror into durable storage, token first. The two writes are
        // sequential, not atomic; a later sign-in overwrites both.
        self.inner
            .store
            .put(keys::AUTH_TOKEN, success.token.expose_secret())
            .await?;
        let user_json =
            serde_json::to_string(&profile).map_err(SessionStoreError::Serialization)?;
        self.inner.store.put(keys::AUTH_USER, &user_json).await?;

        Ok(profile)
    }

    /// Sign out.
    ///
    /// Calls the remote logout endpoint best-effort with the current token
    /// if one exists; failures there are logged and absorbed so local
    /// sign-out always succeeds. The in-memory session is cleared and both
    /// persisted keys removed unconditionally. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Store` only when removing the persisted keys
    /// fails.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let token = self
            .inner
            .state
            .read()
            .await
            .as_ref()
            .map(|auth| auth.token.clone());

        if let Some(token) = token
            && let Err(e) = self.inner.backend.logout(&token).await
        {
            warn!(error = %e, "remote logout failed, clearing local session anyway");
        }

        *self.inner.state.write().await = None;
        self.inner.store.remove(keys::AUTH_TOKEN).await?;
        self.inner.store.remove(keys::AUTH_USER).await?;

        Ok(())
    }

    /// Profile of the signed-in user, if any.
    pub async fn user(&self) -> Option<UserProfile> {
        self.inner
            .state
            .read()
            .await
            .as_ref()
            .map(|auth| auth.user.clone())
    }

    /// Current bearer credential, if any.
    pub async fn token(&self) -> Option<SecretString> {
        self.inner
            .state
            .read()
            .await
            .as_ref()
            .map(|auth| auth.token.clone())
    }

    /// Whether a sign-in call is currently in flight.
    #[must_use]
    pub fn is_loading_auth(&self) -> bool {
        self.inner.is_loading.load(Ordering::SeqCst)
    }

    /// Whether a user is currently signed in.
    pub async fn is_signed_in(&self) -> bool {
        self.inner.state.read().await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use encontro_core::{UserId, UserType};

    use super::*;
    use crate::session::MemorySessionStore;

    fn profile() -> UserProfile {
        UserProfile {
            id: UserId::new(1),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            user_type: UserType::Standard,
        }
    }

    fn session() -> AuthSession<StaticAuthBackend, MemorySessionStore> {
        let backend = StaticAuthBackend::new().with_account(StaticAccount {
            email: "ana@example.com".to_string(),
            password: SecretString::from("s3nh4"),
            profile: profile(),
            token: "tok-1".to_string(),
        });
        AuthSession::new(backend, MemorySessionStore::new())
    }

    #[tokio::test]
    async fn test_sign_in_sets_user_and_token_together() {
        let session = session();
        assert!(!session.is_signed_in().await);

        let user = session
            .sign_in("ana@example.com", SecretString::from("s3nh4"))
            .await
            .expect("sign in");

        assert_eq!(user, profile());
        assert_eq!(session.user().await, Some(profile()));
        assert_eq!(
            session.token().await.map(|t| t.expose_secret().to_string()),
            Some("tok-1".to_string())
        );
        assert!(!session.is_loading_auth());
    }

    #[tokio::test]
    async fn test_failed_sign_in_leaves_session_untouched() {
        let session = session();
        let err = session
            .sign_in("ana@example.com", SecretString::from("wrong"))
            .await
            .expect_err("must reject");

        assert!(matches!(err, AuthError::Rejected(_)));
        assert!(!session.is_signed_in().await);
        assert!(!session.is_loading_auth());
    }

    /// Backend whose login never resolves, for observing in-flight state.
    struct StalledBackend;

    impl AuthBackend for StalledBackend {
        async fn login(
            &self,
            _email: &str,
            _password: &SecretString,
        ) -> Result<LoginSuccess, AuthError> {
            std::future::pending().await
        }

        async fn logout(&self, _token: &SecretString) -> Result<(), AuthError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_loading_flag_clears_when_sign_in_is_dropped_mid_flight() {
        let session = AuthSession::new(StalledBackend, MemorySessionStore::new());

        let mut fut = Box::pin(session.sign_in("ana@example.com", SecretString::from("s3nh4")));
        let poll = tokio::time::timeout(std::time::Duration::from_millis(10), fut.as_mut()).await;
        assert!(poll.is_err(), "login must still be in flight");
        assert!(session.is_loading_auth());

        drop(fut);
        assert!(!session.is_loading_auth());
    }

    #[tokio::test]
    async fn test_sign_out_is_idempotent() {
        let session = session();
        session
            .sign_in("ana@example.com", SecretString::from("s3nh4"))
            .await
            .expect("sign in");

        session.sign_out().await.expect("first sign out");
        assert!(!session.is_signed_in().await);

        session.sign_out().await.expect("second sign out");
        assert!(!session.is_signed_in().await);
        assert_eq!(session.user().await, None);
    }
}
