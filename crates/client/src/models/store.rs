//! Store domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use craftica_core::{StoreId, UserId};

use super::Location;

/// A marketplace store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Store {
    /// Unique store ID.
    #[serde(rename = "_id")]
    pub id: StoreId,
    /// Store name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Average rating, when the backend has one.
    #[serde(rename = "calificacion", default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Banner image URL.
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Physical location.
    #[serde(rename = "localidad", default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    /// Owning user, when the backend includes it.
    #[serde(rename = "usuario_id", default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `create_store`.
#[derive(Debug, Clone, Serialize)]
pub struct NewStore {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "calificacion", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(rename = "imagen", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "localidad", skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(rename = "usuario_id", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<UserId>,
}

/// Partial payload for `update_store`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreUpdate {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "calificacion", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(rename = "imagen", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "localidad", skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

/// Filter and pagination parameters for listing stores.
///
/// `None` fields are left out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StoreFilter {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Filter by city (`ciudad` query parameter).
    pub city: Option<String>,
    /// Filter by country (`pais` query parameter).
    pub country: Option<String>,
}

impl StoreFilter {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(city) = &self.city {
            pairs.push(("ciudad", city.clone()));
        }
        if let Some(country) = &self.country {
            pairs.push(("pais", country.clone()));
        }
        pairs
    }
}
