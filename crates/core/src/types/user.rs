//! User profile types.

use serde::{Deserialize, Serialize};

use crate::UserId;

/// Account type assigned by the backend.
///
/// Unknown wire values degrade to [`UserType::Standard`] rather than failing
/// deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Can create and manage events.
    Admin,
    /// Can browse events and manage their own registrations.
    #[default]
    #[serde(other)]
    Standard,
}

impl UserType {
    /// Whether this account may create events.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Normalized profile of the signed-in user.
///
/// Replaced wholesale on sign-in and cleared on sign-out - never partially
/// mutated. The field names here are the client-side names; the backend's
/// `nome`/`tipo` fields are renamed during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Backend user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address used to sign in.
    pub email: String,
    /// Account type.
    #[serde(rename = "type")]
    pub user_type: UserType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_serializes_with_type_key() {
        let profile = UserProfile {
            id: UserId::new(1),
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            user_type: UserType::Admin,
        };

        let json = serde_json::to_value(&profile).expect("serialize");
        assert_eq!(json["type"], "admin");
        assert_eq!(json["name"], "Ana");
    }

    #[test]
    fn test_unknown_user_type_degrades_to_standard() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id":2,"name":"Bia","email":"bia@example.com","type":"organizador"}"#,
        )
        .expect("deserialize");

        assert_eq!(profile.user_type, UserType::Standard);
        assert!(!profile.user_type.is_admin());
    }
}
