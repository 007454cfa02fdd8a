//! Post (publicación) domain types.

use serde::{Deserialize, Serialize};

use craftica_core::{PostId, ProductId, StoreId};

/// A store's post announcing or showcasing a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    /// Unique post ID.
    #[serde(rename = "_id")]
    pub id: PostId,
    /// Title.
    #[serde(rename = "titulo")]
    pub title: String,
    /// Body text.
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Publication date as the backend sends it (free-form string).
    #[serde(rename = "fecha")]
    pub date: String,
    /// Image URLs.
    #[serde(rename = "imagenes")]
    pub images: Vec<String>,
    /// Store the post belongs to.
    #[serde(rename = "tienda_id")]
    pub store_id: StoreId,
    /// Product the post is about.
    #[serde(rename = "producto_id")]
    pub product_id: ProductId,
}

/// Payload for `create_post`.
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "imagenes")]
    pub images: Vec<String>,
    #[serde(rename = "tienda_id")]
    pub store_id: StoreId,
    #[serde(rename = "producto_id")]
    pub product_id: ProductId,
}

/// Partial payload for `update_post`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostUpdate {
    #[serde(rename = "titulo", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "fecha", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "imagenes", skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

/// Filter and pagination parameters for listing posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PostFilter {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Filter by store (`tienda_id` query parameter).
    pub store_id: Option<StoreId>,
}

impl PostFilter {
    pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
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
    fn test_post_decodes_wire_shape() {
        let raw = serde_json::json!({
            "_id": 9,
            "titulo": "Nueva colección",
            "descripcion": "Ya disponible",
            "fecha": "2024-06-01",
            "imagenes": ["https://example.com/a.jpg"],
            "tienda_id": 3,
            "producto_id": "p-17"
        });
        let post: Post = serde_json::from_value(raw).unwrap();
        assert_eq!(post.store_id, StoreId::new(3i64));
        assert_eq!(post.product_id.as_str(), "p-17");
    }
}
