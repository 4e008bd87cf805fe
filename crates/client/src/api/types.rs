//! Wire types for the events backend.
//!
//! Field names follow the backend's mixed convention: event fields are
//! camelCase English, registration fields are Portuguese.

use serde::{Deserialize, Serialize};

use encontro_core::{EventId, UserId};

/// Default price label for events created without one.
const FREE_PRICE: &str = "Gratuito";

/// An event as listed by `GET /eventos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Backend event ID.
    pub id: EventId,
    /// Event title.
    pub title: String,
    /// Venue, e.g. "São Paulo - SP".
    pub location: String,
    /// Display date, e.g. "18/03/2025".
    pub date: String,
    /// Display price, e.g. "R$ 150,00" or "Gratuito".
    pub price: String,
    /// Cover image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Number of registered subscribers.
    #[serde(default)]
    pub subscribers_count: u32,
    /// Long-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// Headline attractions, comma-separated.
    #[serde(default)]
    pub attractions: Option<String>,
}

/// Payload for creating an event (admin operation).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub location: String,
    pub price: String,
    pub image_url: String,
    /// Always 0 on create; the backend counts registrations from there.
    pub subscribers_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attractions: Option<String>,
}

impl NewEvent {
    /// Build a payload; an empty price falls back to the free label.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        location: impl Into<String>,
        price: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        let price = price.into();
        Self {
            title: title.into(),
            date: date.into(),
            location: location.into(),
            price: if price.trim().is_empty() {
                FREE_PRICE.to_string()
            } else {
                price
            },
            image_url: image_url.into(),
            subscribers_count: 0,
            description: None,
            attractions: None,
        }
    }
}

/// One person attending under a registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Participant name.
    #[serde(rename = "nome")]
    pub name: String,
    /// Participant age, when given.
    #[serde(rename = "idade")]
    pub age: Option<u32>,
}

impl Participant {
    /// Create a participant with a trimmed name.
    #[must_use]
    pub fn new(name: impl Into<String>, age: Option<u32>) -> Self {
        Self {
            name: name.into().trim().to_string(),
            age,
        }
    }

    /// Whether the participant carries a usable name.
    #[must_use]
    pub fn is_named(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// Body of `POST /eventos/:id/inscricoes`.
#[derive(Debug, Serialize)]
pub(crate) struct RegistrationRequest<'a> {
    #[serde(rename = "usuarioId")]
    pub user_id: UserId,
    #[serde(rename = "participantes")]
    pub participants: &'a [Participant],
}

/// Body of `POST /usuarios`.
#[derive(Debug, Serialize)]
pub(crate) struct NewAccountRequest<'a> {
    #[serde(rename = "nome")]
    pub name: &'a str,
    pub email: &'a str,
    pub senha: &'a str,
}
