//! Reaction domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use craftica_core::{PostId, ReactionId, ReactionKind, UserId};

/// A user reaction on a post.
///
/// The backend intends one reaction per user per post, discriminated by
/// [`ReactionKind`]; nothing enforces that client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Reaction {
    /// Unique reaction ID.
    #[serde(rename = "_id")]
    pub id: ReactionId,
    /// Like or dislike.
    #[serde(rename = "reaccion")]
    pub kind: ReactionKind,
    /// Reaction date as the backend sends it.
    #[serde(rename = "fecha")]
    pub date: String,
    /// Reacting user.
    #[serde(rename = "usuario_id")]
    pub user_id: UserId,
    /// Post reacted to.
    #[serde(rename = "publicacion_id")]
    pub post_id: PostId,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload for `create_reaction`.
#[derive(Debug, Clone, Serialize)]
pub struct NewReaction {
    #[serde(rename = "reaccion")]
    pub kind: ReactionKind,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "usuario_id")]
    pub user_id: UserId,
    #[serde(rename = "publicacion_id")]
    pub post_id: PostId,
}

/// Partial payload for `update_reaction`. Only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReactionUpdate {
    #[serde(rename = "reaccion", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ReactionKind>,
    #[serde(rename = "fecha", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}
