//! Reaction operations.

use tracing::instrument;

use craftica_core::{PostId, ReactionId};

use crate::error::ApiError;
use crate::models::{NewReaction, Reaction, ReactionUpdate};

use super::CrafticaClient;
use super::normalize::decode_items;

impl CrafticaClient {
    /// List the reactions on a post.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self), fields(post_id = %post_id))]
    pub async fn get_reactions_for_post(
        &self,
        post_id: &PostId,
    ) -> Result<Vec<Reaction>, ApiError> {
        let raw = self
            .execute(self.get(&format!("/reacciones/publicacion/{post_id}")))
            .await?;
        decode_items(raw)
    }

    /// Create a reaction. Plain 2xx contract; call sites refetch the post's
    /// reaction list afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, reaction))]
    pub async fn create_reaction(&self, reaction: &NewReaction) -> Result<(), ApiError> {
        self.execute(self.post("/reacciones").json(reaction)).await?;
        Ok(())
    }

    /// Update a reaction (e.g. flip like to dislike).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, update), fields(id = %id))]
    pub async fn update_reaction(
        &self,
        id: &ReactionId,
        update: &ReactionUpdate,
    ) -> Result<(), ApiError> {
        self.execute(self.put(&format!("/reacciones/{id}")).json(update))
            .await?;
        Ok(())
    }

    /// Delete a reaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_reaction(&self, id: &ReactionId) -> Result<(), ApiError> {
        self.execute(self.delete(&format!("/reacciones/{id}")))
            .await?;
        Ok(())
    }
}
