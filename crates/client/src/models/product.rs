//! Product domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use craftica_core::{Price, ProductId, StoreId};

/// A product offered on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product ID.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Product name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Unit price.
    #[serde(rename = "precio")]
    pub price: Price,
    /// Free-text description.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Category tags.
    #[serde(rename = "categoria")]
    pub categories: Vec<String>,
    /// Image URL.
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `create_product`.
#[derive(Debug, Clone, Serialize)]
pub struct NewProduct {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precio")]
    pub price: Price,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "categoria")]
    pub categories: Vec<String>,
    #[serde(rename = "imagen", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Partial payload for `update_product`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductUpdate {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "precio", skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(rename = "imagen", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Filter and pagination parameters for listing products.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ProductFilter {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Filter by category (`categoria` query parameter).
    pub category: Option<String>,
    /// Filter by owning store (`tienda_id` query parameter).
    pub store_id: Option<StoreId>,
}

impl ProductFilter {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(category) = &self.category {
            pairs.push(("categoria", category.clone()));
        }
        if let Some(store_id) = &self.store_id {
            pairs.push(("tienda_id", store_id.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_wire_shape() {
        let raw = serde_json::json!({
            "_id": 5,
            "nombre": "Taza artesanal",
            "precio": 19.99,
            "descripcion": "Hecha a mano",
            "categoria": ["cerámica", "cocina"],
            "imagen": "https://example.com/taza.jpg"
        });
        let product: Product = serde_json::from_value(raw).unwrap();
        assert_eq!(product.name, "Taza artesanal");
        assert_eq!(product.price.to_string(), "19.99");
        assert_eq!(product.categories.len(), 2);
    }

    #[test]
    fn test_filter_query_includes_store_id() {
        let filter = ProductFilter {
            store_id: Some(StoreId::new(3i64)),
            ..ProductFilter::default()
        };
        assert_eq!(filter.query(), vec![("tienda_id", "3".to_string())]);
    }
}
