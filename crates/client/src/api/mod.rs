//! Events, registrations, and accounts REST client.
//!
//! Plain request/response plumbing over the backend's documented contracts.
//! Every endpoint shares the auth module's defensive parse idiom: error
//! bodies are best-effort JSON, and the server's `error` string is surfaced
//! when present.

mod error;
mod types;

pub use error::ApiError;
pub use types::{Event, NewEvent, Participant};

use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use encontro_core::{EventId, UserId};

use types::{NewAccountRequest, RegistrationRequest};

/// Client for the events backend.
#[derive(Clone)]
pub struct EventsApi {
    client: reqwest::Client,
    api_url: url::Url,
}

impl EventsApi {
    /// Create a client against the given API base URL.
    #[must_use]
    pub const fn new(client: reqwest::Client, api_url: url::Url) -> Self {
        Self { client, api_url }
    }

    fn endpoint(&self, path: &str) -> Result<url::Url, ApiError> {
        self.api_url
            .join(path)
            .map_err(|e| ApiError::Malformed(format!("invalid endpoint {path}: {e}")))
    }

    /// List all events. No authentication required.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` on non-success statuses and
    /// `ApiError::Malformed` when a success body is not an event list.
    #[instrument(skip(self))]
    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let response = self.client.get(self.endpoint("/eventos")?).send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        ensure_success(status, &body)?;

        serde_json::from_slice(&body).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    /// Register the user (and their guests) for an event.
    ///
    /// Participants without a name are dropped before sending, matching the
    /// form behavior; an empty remainder is rejected client-side.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NoParticipants` when no named participant remains,
    /// and `ApiError::Api` when the backend refuses the registration.
    #[instrument(skip(self, token), fields(event = %event_id, user = %user_id))]
    pub async fn register(
        &self,
        event_id: EventId,
        user_id: UserId,
        participants: &[Participant],
        token: &SecretString,
    ) -> Result<(), ApiError> {
        let named: Vec<Participant> = participants
            .iter()
            .filter(|p| p.is_named())
            .cloned()
            .collect();
        if named.is_empty() {
            return Err(ApiError::NoParticipants);
        }

        let response = self
            .client
            .post(self.endpoint(&format!("/eventos/{event_id}/inscricoes"))?)
            .bearer_auth(token.expose_secret())
            .json(&RegistrationRequest {
                user_id,
                participants: &named,
            })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        ensure_success(status, &body)
    }

    /// Cancel the user's registration for an event.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` when the backend refuses the cancellation.
    #[instrument(skip(self, token), fields(event = %event_id, user = %user_id))]
    pub async fn cancel_registration(
        &self,
        event_id: EventId,
        user_id: UserId,
        token: &SecretString,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.endpoint(&format!("/eventos/{event_id}/inscricoes/{user_id}"))?)
            .bearer_auth(token.expose_secret())
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        ensure_success(status, &body)
    }

    /// Create a new event (admin operation).
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` when the backend refuses the event.
    #[instrument(skip(self, token, event), fields(title = %event.title))]
    pub async fn create_event(
        &self,
        event: &NewEvent,
        token: &SecretString,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint("/eventos")?)
            .bearer_auth(token.expose_secret())
            .json(event)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        ensure_success(status, &body)
    }

    /// Create a user account.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` when the backend refuses the account.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn create_account(
        &self,
        name: &str,
        email: &str,
        password: &SecretString,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint("/usuarios")?)
            .json(&NewAccountRequest {
                name,
                email,
                senha: password.expose_secret(),
            })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;
        ensure_success(status, &body)
    }
}

/// Check a response status, extracting the server's `error` message from a
/// best-effort JSON body on failure.
fn ensure_success(status: u16, body: &[u8]) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let data: serde_json::Value =
        serde_json::from_slice(body).unwrap_or_else(|_| serde_json::json!({}));
    let message = data
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| "request failed".to_string(), String::from);

    Err(ApiError::Api { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_statuses_pass() {
        assert!(ensure_success(200, b"{}").is_ok());
        assert!(ensure_success(204, b"").is_ok());
    }

    #[test]
    fn test_error_message_is_extracted() {
        let err = ensure_success(409, br#"{"error":"ja inscrito"}"#).expect_err("must fail");
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "ja inscrito");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_error_body_falls_back() {
        let err = ensure_success(500, b"boom").expect_err("must fail");
        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "request failed");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
