//! Store operations.

use tracing::instrument;

use craftica_core::StoreId;

use crate::error::{ApiError, EntityKind};
use crate::models::{NewStore, Page, Store, StoreFilter, StoreUpdate};

use super::normalize::{StatusContract, decode_created, decode_entity, decode_status, resolve_page};
use super::{CrafticaClient, DEFAULT_LIMIT};

const CREATE: StatusContract = StatusContract {
    phrase: "Tienda agregada",
    entity_key: "store",
    fallback: "Error al crear la tienda",
};

const UPDATE: StatusContract = StatusContract {
    phrase: "Tienda Actualizada",
    entity_key: "store",
    fallback: "Error al actualizar la tienda",
};

const DELETE: StatusContract = StatusContract {
    phrase: "Tienda Eliminada",
    entity_key: "store",
    fallback: "Error al eliminar la tienda",
};

impl CrafticaClient {
    /// List stores with optional filters and pagination.
    ///
    /// Backend-signaled list failures degrade to an empty page; transport
    /// and HTTP failures propagate.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn get_stores(&self, filter: &StoreFilter) -> Result<Page<Store>, ApiError> {
        let raw = self
            .execute(self.get("/tiendas").query(&filter.query()))
            .await?;
        resolve_page(
            raw,
            filter.page.unwrap_or(1),
            filter.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }

    /// Fetch one store by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the response lacks the identity
    /// field, or another error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_store(&self, id: &StoreId) -> Result<Store, ApiError> {
        let raw = self.execute(self.get(&format!("/tiendas/{id}"))).await?;
        decode_entity(raw, EntityKind::Store)
    }

    /// Create a store, returning the created entity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the backend's status phrase does
    /// not signal success.
    #[instrument(skip(self, store))]
    pub async fn create_store(&self, store: &NewStore) -> Result<Store, ApiError> {
        let raw = self.execute(self.post("/tiendas").json(store)).await?;
        decode_created(raw, CREATE)
    }

    /// Update a store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the backend's status phrase does
    /// not signal success.
    #[instrument(skip(self, update), fields(id = %id))]
    pub async fn update_store(&self, id: &StoreId, update: &StoreUpdate) -> Result<(), ApiError> {
        let raw = self
            .execute(self.put(&format!("/tiendas/{id}")).json(update))
            .await?;
        decode_status(raw, UPDATE)
    }

    /// Delete a store.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the backend's status phrase does
    /// not signal success.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_store(&self, id: &StoreId) -> Result<(), ApiError> {
        let raw = self.execute(self.delete(&format!("/tiendas/{id}"))).await?;
        decode_status(raw, DELETE)
    }
}
