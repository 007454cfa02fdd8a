//! User domain types.
//!
//! Wire field names are the backend's Spanish ones; Rust field names are
//! English via serde renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use craftica_core::{Email, UserId};

/// A marketplace user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique user ID.
    #[serde(rename = "_id")]
    pub id: UserId,
    /// Given names.
    #[serde(rename = "nombres")]
    pub first_names: String,
    /// Family names.
    #[serde(rename = "apellidos")]
    pub last_names: String,
    /// Contact phone number.
    #[serde(rename = "telefono")]
    pub phone: String,
    /// Profile photo URL.
    #[serde(rename = "foto", default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Login credential (the backend echoes it back on reads).
    #[serde(rename = "credencial")]
    pub credential: Credential,
    /// Where the user lives.
    #[serde(rename = "localidad")]
    pub location: Location,
    /// When the account was created. Not every endpoint includes it.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// When the account was last updated.
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Login credential pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Credential {
    /// Login email.
    #[serde(rename = "correo")]
    pub email: Email,
    /// Password, plain on the wire (backend contract, not ours to fix).
    pub password: String,
}

/// A postal location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Location {
    /// Street address.
    #[serde(rename = "direccion")]
    pub address: String,
    /// City.
    #[serde(rename = "ciudad")]
    pub city: String,
    /// Country.
    #[serde(rename = "pais")]
    pub country: String,
}

/// Credentials for `login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginCredentials {
    /// Login email.
    #[serde(rename = "correo")]
    pub email: Email,
    /// Password.
    pub password: String,
}

/// Payload for `register`.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    #[serde(rename = "nombres")]
    pub first_names: String,
    #[serde(rename = "apellidos")]
    pub last_names: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "foto", skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(rename = "credencial")]
    pub credential: Credential,
    #[serde(rename = "localidad")]
    pub location: Location,
}

/// Partial payload for `update_profile`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserUpdate {
    #[serde(rename = "nombres", skip_serializing_if = "Option::is_none")]
    pub first_names: Option<String>,
    #[serde(rename = "apellidos", skip_serializing_if = "Option::is_none")]
    pub last_names: Option<String>,
    #[serde(rename = "telefono", skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(rename = "foto", skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(rename = "localidad", skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_decodes_wire_shape() {
        let raw = serde_json::json!({
            "_id": 12,
            "nombres": "Ana",
            "apellidos": "Pérez",
            "telefono": "555-0101",
            "credencial": {"correo": "ana@example.com", "password": "secret"},
            "localidad": {"direccion": "Calle 1", "ciudad": "Madrid", "pais": "España"},
            "createdAt": "2024-05-01T12:00:00.000Z",
            "updatedAt": "2024-05-02T08:30:00.000Z"
        });

        let user: User = serde_json::from_value(raw).unwrap();
        assert_eq!(user.id, UserId::new(12i64));
        assert_eq!(user.credential.email.as_str(), "ana@example.com");
        assert_eq!(user.location.city, "Madrid");
        assert!(user.photo.is_none());
        assert!(user.created_at.is_some());
    }

    #[test]
    fn test_update_serializes_only_set_fields() {
        let update = UserUpdate {
            phone: Some("555-0202".to_string()),
            ..UserUpdate::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({"telefono": "555-0202"}));
    }
}
