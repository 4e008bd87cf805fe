//! Behavioral tests for Encontro.
//!
//! These tests exercise the session manager, session store, and startup
//! gate together through the static auth backend - no network, no backend
//! process required.
//!
//! # Test Categories
//!
//! - `auth_session` - Sign-in/sign-out against the persisted session mirror
//! - `startup_gate` - Bootstrap verdicts and their readiness mapping

#![cfg_attr(not(test), forbid(unsafe_code))]

use secrecy::SecretString;

use encontro_client::AuthSession;
use encontro_client::auth::{StaticAccount, StaticAuthBackend};
use encontro_client::session::MemorySessionStore;
use encontro_core::{UserId, UserProfile, UserType};

/// Well-known password of every [`known_profile`] account.
pub const TEST_PASSWORD: &str = "s3nh4-forte";

/// Token issued by the static backend for the known account.
pub const TEST_TOKEN: &str = "test-token-1";

/// The profile the static backend signs in.
#[must_use]
pub fn known_profile() -> UserProfile {
    UserProfile {
        id: UserId::new(42),
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        user_type: UserType::Standard,
    }
}

/// A session manager over the static backend and an in-memory store,
/// together with a second handle on the same store for observing the
/// persisted mirror.
#[must_use]
pub fn test_session() -> (
    AuthSession<StaticAuthBackend, MemorySessionStore>,
    MemorySessionStore,
) {
    let backend = StaticAuthBackend::new().with_account(StaticAccount {
        email: known_profile().email,
        password: SecretString::from(TEST_PASSWORD),
        profile: known_profile(),
        token: TEST_TOKEN.to_string(),
    });

    let store = MemorySessionStore::new();
    let session = AuthSession::new(backend, store.clone());
    (session, store)
}
