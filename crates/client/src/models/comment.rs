//! Comment domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use craftica_core::{CommentId, PostId, UserId};

/// A user comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    /// Unique comment ID.
    #[serde(rename = "_id")]
    pub id: CommentId,
    /// Comment text.
    #[serde(rename = "comentario")]
    pub body: String,
    /// Comment date as the backend sends it.
    #[serde(rename = "fecha")]
    pub date: String,
    /// Author.
    #[serde(rename = "usuario_id")]
    pub user_id: UserId,
    /// Post the comment belongs to.
    #[serde(rename = "publicacion_id")]
    pub post_id: PostId,
    /// Like counter.
    #[serde(rename = "megusta", default)]
    pub likes: i64,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `create_comment`.
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    #[serde(rename = "comentario")]
    pub body: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "usuario_id")]
    pub user_id: UserId,
    #[serde(rename = "publicacion_id")]
    pub post_id: PostId,
    #[serde(rename = "megusta")]
    pub likes: i64,
}

/// Partial payload for `update_comment`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommentUpdate {
    #[serde(rename = "comentario", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(rename = "megusta", skip_serializing_if = "Option::is_none")]
    pub likes: Option<i64>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_decodes_wire_shape() {
        let raw = serde_json::json!({
            "_id": 21,
            "comentario": "Me encanta",
            "fecha": "2024-06-02",
            "usuario_id": 12,
            "publicacion_id": 9,
            "megusta": 4
        });
        let comment: Comment = serde_json::from_value(raw).unwrap();
        assert_eq!(comment.body, "Me encanta");
        assert_eq!(comment.likes, 4);
        assert_eq!(comment.post_id, PostId::new(9i64));
    }
}
