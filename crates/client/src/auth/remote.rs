//! Remote auth backend talking to the backend's `/auth` endpoints.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use encontro_core::{UserId, UserProfile, UserType};

use super::backend::{AuthBackend, LoginSuccess};
use super::error::AuthError;

/// Login request body.
///
/// The backend expects the password under the field name `senha` - a wire
/// contract, not negotiable by the client.
#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    senha: &'a str,
}

/// User representation as the backend sends it.
#[derive(Debug, Deserialize)]
struct WireUser {
    id: UserId,
    nome: String,
    email: String,
    #[serde(default)]
    tipo: UserType,
}

impl WireUser {
    /// Rename the backend's fields to the client-side names.
    fn normalize(self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.nome,
            email: self.email,
            user_type: self.tipo,
        }
    }
}

/// Successful login response body.
#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: WireUser,
    token: String,
}

/// Auth backend that calls the remote `/auth/login` and `/auth/logout`
/// endpoints.
#[derive(Clone)]
pub struct RemoteAuthBackend {
    client: reqwest::Client,
    api_url: url::Url,
}

impl RemoteAuthBackend {
    /// Create a backend against the given API base URL.
    #[must_use]
    pub const fn new(client: reqwest::Client, api_url: url::Url) -> Self {
        Self { client, api_url }
    }

    fn endpoint(&self, path: &str) -> Result<url::Url, AuthError> {
        self.api_url
            .join(path)
            .map_err(|e| AuthError::MalformedResponse(format!("invalid endpoint {path}: {e}")))
    }
}

impl AuthBackend for RemoteAuthBackend {
    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: &str, password: &SecretString) -> Result<LoginSuccess, AuthError> {
        let response = self
            .client
            .post(self.endpoint("/auth/login")?)
            .json(&LoginRequest {
                email,
                senha: password.expose_secret(),
            })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        interpret_login_response(status, &body)
    }

    #[instrument(skip(self, token))]
    async fn logout(&self, token: &SecretString) -> Result<(), AuthError> {
        // The response body and status are ignored; reaching the endpoint
        // at all is best-effort.
        self.client
            .post(self.endpoint("/auth/logout")?)
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        Ok(())
    }
}

/// Map a login response to its outcome.
///
/// The body is parsed defensively: malformed or absent JSON counts as an
/// empty object. On non-success statuses the server's `error` string is
/// surfaced verbatim when present, with a generic status-carrying fallback
/// otherwise.
fn interpret_login_response(status: u16, body: &[u8]) -> Result<LoginSuccess, AuthError> {
    let data: serde_json::Value =
        serde_json::from_slice(body).unwrap_or_else(|_| serde_json::json!({}));

    if !(200..300).contains(&status) {
        let message = data
            .get("error")
            .and_then(serde_json::Value::as_str)
            .map_or_else(|| format!("login failed (status {status})"), String::from);
        return Err(AuthError::Rejected(message));
    }

    let parsed: LoginResponse = serde_json::from_value(data)
        .map_err(|e| AuthError::MalformedResponse(e.to_string()))?;

    Ok(LoginSuccess {
        user: parsed.user.normalize(),
        token: SecretString::from(parsed.token),
    })
}
