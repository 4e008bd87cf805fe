//! `login`, `logout`, and `signup` commands.

use secrecy::SecretString;

use encontro_client::AuthSession;
use encontro_client::api::EventsApi;
use encontro_client::auth::RemoteAuthBackend;
use encontro_client::session::FileSessionStore;

use super::{CliError, Context};

/// Build the session manager over the remote backend and file store.
pub(crate) fn session(ctx: &Context) -> AuthSession<RemoteAuthBackend, FileSessionStore> {
    AuthSession::new(
        RemoteAuthBackend::new(ctx.http.clone(), ctx.config.api_url.clone()),
        FileSessionStore::new(&ctx.config.session_path),
    )
}

/// Sign in and persist the session mirror.
///
/// # Errors
///
/// Returns `CliError::Auth` when the backend rejects the credentials or the
/// network fails.
pub async fn login(ctx: &Context, email: &str, password: String) -> Result<(), CliError> {
    let session = session(ctx);
    let user = session.sign_in(email, SecretString::from(password)).await?;

    println!("Signed in as {} <{}>.", user.name, user.email);
    if user.user_type.is_admin() {
        println!("This account can create events.");
    }
    Ok(())
}

/// Clear the persisted session mirror.
///
/// A fresh process holds no token, so there is nothing to invalidate
/// server-side; the local clear is what matters and always succeeds.
///
/// # Errors
///
/// Returns `CliError::Auth` when removing the persisted keys fails.
pub async fn logout(ctx: &Context) -> Result<(), CliError> {
    session(ctx).sign_out().await?;
    println!("Signed out.");
    Ok(())
}

/// Create a new account.
///
/// # Errors
///
/// Returns `CliError::Api` when the backend refuses the account.
pub async fn signup(
    ctx: &Context,
    name: &str,
    email: &str,
    password: String,
) -> Result<(), CliError> {
    let api = EventsApi::new(ctx.http.clone(), ctx.config.api_url.clone());
    api.create_account(name, email, &SecretString::from(password))
        .await?;

    println!("Account created. Sign in with `encontro login` to continue.");
    Ok(())
}
