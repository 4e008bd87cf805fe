//! Behavioral tests for the auth session manager and its persisted mirror.

use secrecy::{ExposeSecret, SecretString};

use encontro_client::AuthSession;
use encontro_client::session::{FileSessionStore, SessionStore, keys};
use encontro_core::UserProfile;

use encontro_integration_tests::{TEST_PASSWORD, TEST_TOKEN, known_profile, test_session};

// =============================================================================
// Sign-in
// =============================================================================

#[tokio::test]
async fn test_sign_in_mirrors_token_and_profile_into_store() {
    let (session, store) = test_session();

    let user = session
        .sign_in(&known_profile().email, SecretString::from(TEST_PASSWORD))
        .await
        .expect("sign in");
    assert_eq!(user, known_profile());

    let stored_token = store.get(keys::AUTH_TOKEN).await.expect("get token");
    assert_eq!(stored_token.as_deref(), Some(TEST_TOKEN));

    let stored_user = store
        .get(keys::AUTH_USER)
        .await
        .expect("get user")
        .expect("user present");
    let profile: UserProfile = serde_json::from_str(&stored_user).expect("stored profile parses");
    assert_eq!(profile, known_profile());

    // The persisted profile uses the client-side field names.
    let raw: serde_json::Value = serde_json::from_str(&stored_user).expect("json");
    assert!(raw.get("name").is_some());
    assert!(raw.get("nome").is_none());
}

#[tokio::test]
async fn test_rejected_sign_in_persists_nothing() {
    let (session, store) = test_session();

    session
        .sign_in(&known_profile().email, SecretString::from("wrong"))
        .await
        .expect_err("must reject");

    assert_eq!(store.get(keys::AUTH_TOKEN).await.expect("get"), None);
    assert_eq!(store.get(keys::AUTH_USER).await.expect("get"), None);
    assert!(!session.is_signed_in().await);
}

#[tokio::test]
async fn test_loading_flag_resets_after_both_outcomes() {
    let (session, _store) = test_session();

    session
        .sign_in(&known_profile().email, SecretString::from(TEST_PASSWORD))
        .await
        .expect("sign in");
    assert!(!session.is_loading_auth());

    session
        .sign_in(&known_profile().email, SecretString::from("wrong"))
        .await
        .expect_err("must reject");
    assert!(!session.is_loading_auth());
}

#[tokio::test]
async fn test_session_is_shared_across_clones() {
    let (session, _store) = test_session();
    let observer = session.clone();

    session
        .sign_in(&known_profile().email, SecretString::from(TEST_PASSWORD))
        .await
        .expect("sign in");

    assert_eq!(observer.user().await, Some(known_profile()));
    assert_eq!(
        observer.token().await.map(|t| t.expose_secret().to_string()),
        Some(TEST_TOKEN.to_string())
    );
}

// =============================================================================
// Sign-out
// =============================================================================

#[tokio::test]
async fn test_sign_out_clears_memory_and_store() {
    let (session, store) = test_session();

    session
        .sign_in(&known_profile().email, SecretString::from(TEST_PASSWORD))
        .await
        .expect("sign in");
    session.sign_out().await.expect("sign out");

    assert!(!session.is_signed_in().await);
    assert_eq!(session.user().await, None);
    assert_eq!(session.token().await.map(|t| t.expose_secret().to_string()), None);
    assert_eq!(store.get(keys::AUTH_TOKEN).await.expect("get"), None);
    assert_eq!(store.get(keys::AUTH_USER).await.expect("get"), None);
}

#[tokio::test]
async fn test_sign_out_twice_in_a_row_is_harmless() {
    let (session, store) = test_session();

    session.sign_out().await.expect("first sign out");
    session.sign_out().await.expect("second sign out");

    assert!(!session.is_signed_in().await);
    assert_eq!(store.get(keys::AUTH_TOKEN).await.expect("get"), None);
}

// =============================================================================
// File-backed store
// =============================================================================

#[tokio::test]
async fn test_file_store_mirror_survives_manager_teardown() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("session.json");

    {
        let backend = encontro_client::auth::StaticAuthBackend::new().with_account(
            encontro_client::auth::StaticAccount {
                email: known_profile().email,
                password: SecretString::from(TEST_PASSWORD),
                profile: known_profile(),
                token: TEST_TOKEN.to_string(),
            },
        );
        let session = AuthSession::new(backend, FileSessionStore::new(&path));
        session
            .sign_in(&known_profile().email, SecretString::from(TEST_PASSWORD))
            .await
            .expect("sign in");
    }

    // A fresh store handle sees the mirror; nothing reads it back into a
    // fresh session automatically.
    let store = FileSessionStore::new(&path);
    assert_eq!(
        store.get(keys::AUTH_TOKEN).await.expect("get").as_deref(),
        Some(TEST_TOKEN)
    );
}
