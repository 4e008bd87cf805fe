//! Static-table auth backend.
//!
//! A fixed credential table behind the same [`AuthBackend`] interface as
//! the remote backend. Used for offline development and in tests, where it
//! stands in for the backend without any network.

use secrecy::{ExposeSecret, SecretString};

use encontro_core::UserProfile;

use super::backend::{AuthBackend, LoginSuccess};
use super::error::AuthError;

/// One entry in the static credential table.
pub struct StaticAccount {
    /// Email the entry matches on.
    pub email: String,
    /// Expected password.
    pub password: SecretString,
    /// Profile returned on a match.
    pub profile: UserProfile,
    /// Token issued on a match.
    pub token: String,
}

/// Auth backend backed by a fixed in-memory credential table.
#[derive(Default)]
pub struct StaticAuthBackend {
    accounts: Vec<StaticAccount>,
}

impl StaticAuthBackend {
    /// Create an empty table (every login is rejected).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    /// Add an account to the table.
    #[must_use]
    pub fn with_account(mut self, account: StaticAccount) -> Self {
        self.accounts.push(account);
        self
    }
}

impl AuthBackend for StaticAuthBackend {
    async fn login(&self, email: &str, password: &SecretString) -> Result<LoginSuccess, AuthError> {
        self.accounts
            .iter()
            .find(|account| {
                account.email == email
                    && account.password.expose_secret() == password.expose_secret()
            })
            .map(|account| LoginSuccess {
                user: account.profile.clone(),
                token: SecretString::from(account.token.clone()),
            })
            .ok_or_else(|| AuthError::Rejected("invalid credentials".to_string()))
    }

    async fn logout(&self, _token: &SecretString) -> Result<(), AuthError> {
        Ok(())
    }
}
