//! Post operations.

use tracing::instrument;

use craftica_core::PostId;

use crate::error::{ApiError, EntityKind};
use crate::models::{NewPost, Page, Post, PostFilter, PostUpdate};

use super::normalize::{StatusContract, decode_created, decode_entity, resolve_page};
use super::{CrafticaClient, DEFAULT_LIMIT};

const CREATE: StatusContract = StatusContract {
    phrase: "Publicación agregada",
    entity_key: "publication",
    fallback: "Error al crear la publicación",
};

impl CrafticaClient {
    /// List posts with optional filters and pagination.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn get_posts(&self, filter: &PostFilter) -> Result<Page<Post>, ApiError> {
        let raw = self
            .execute(self.get("/publicaciones").query(&filter.query()))
            .await?;
        resolve_page(
            raw,
            filter.page.unwrap_or(1),
            filter.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }

    /// Fetch one post by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the response lacks the identity
    /// field, or another error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_post(&self, id: &PostId) -> Result<Post, ApiError> {
        let raw = self
            .execute(self.get(&format!("/publicaciones/{id}")))
            .await?;
        decode_entity(raw, EntityKind::Post)
    }

    /// Create a post, returning the created entity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the backend's status phrase does
    /// not signal success.
    #[instrument(skip(self, post))]
    pub async fn create_post(&self, post: &NewPost) -> Result<Post, ApiError> {
        let raw = self.execute(self.post("/publicaciones").json(post)).await?;
        decode_created(raw, CREATE)
    }

    /// Update a post. Plain 2xx contract, no status phrase.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, update), fields(id = %id))]
    pub async fn update_post(&self, id: &PostId, update: &PostUpdate) -> Result<(), ApiError> {
        self.execute(self.put(&format!("/publicaciones/{id}")).json(update))
            .await?;
        Ok(())
    }

    /// Delete a post.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_post(&self, id: &PostId) -> Result<(), ApiError> {
        self.execute(self.delete(&format!("/publicaciones/{id}")))
            .await?;
        Ok(())
    }
}
