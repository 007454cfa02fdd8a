//! Comment operations.

use tracing::instrument;

use craftica_core::{CommentId, PostId};

use crate::error::ApiError;
use crate::models::{Comment, CommentUpdate, NewComment};

use super::CrafticaClient;
use super::normalize::decode_items;

impl CrafticaClient {
    /// List the comments on a post.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self), fields(post_id = %post_id))]
    pub async fn get_comments_for_post(&self, post_id: &PostId) -> Result<Vec<Comment>, ApiError> {
        let raw = self
            .execute(self.get(&format!("/comentarios/publicacion/{post_id}")))
            .await?;
        decode_items(raw)
    }

    /// Create a comment. Plain 2xx contract; call sites refetch the post's
    /// comment list afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, comment))]
    pub async fn create_comment(&self, comment: &NewComment) -> Result<(), ApiError> {
        self.execute(self.post("/comentarios").json(comment)).await?;
        Ok(())
    }

    /// Update a comment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, update), fields(id = %id))]
    pub async fn update_comment(
        &self,
        id: &CommentId,
        update: &CommentUpdate,
    ) -> Result<(), ApiError> {
        self.execute(self.put(&format!("/comentarios/{id}")).json(update))
            .await?;
        Ok(())
    }

    /// Delete a comment.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_comment(&self, id: &CommentId) -> Result<(), ApiError> {
        self.execute(self.delete(&format!("/comentarios/{id}")))
            .await?;
        Ok(())
    }
}
