//! Product operations.

use tracing::instrument;

use craftica_core::ProductId;

use crate::error::{ApiError, EntityKind};
use crate::models::{NewProduct, Page, Product, ProductFilter, ProductUpdate};

use super::normalize::{StatusContract, decode_created, decode_entity, resolve_page};
use super::{CrafticaClient, DEFAULT_LIMIT};

const CREATE: StatusContract = StatusContract {
    phrase: "Producto agregado",
    entity_key: "product",
    fallback: "Error al crear el producto",
};

impl CrafticaClient {
    /// List products with optional filters and pagination.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or decoding fails.
    #[instrument(skip(self))]
    pub async fn get_products(&self, filter: &ProductFilter) -> Result<Page<Product>, ApiError> {
        let raw = self
            .execute(self.get("/productos").query(&filter.query()))
            .await?;
        resolve_page(
            raw,
            filter.page.unwrap_or(1),
            filter.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }

    /// Fetch one product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] when the response lacks the identity
    /// field, or another error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, ApiError> {
        let raw = self.execute(self.get(&format!("/productos/{id}"))).await?;
        decode_entity(raw, EntityKind::Product)
    }

    /// Create a product, returning the created entity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the backend's status phrase does
    /// not signal success.
    #[instrument(skip(self, product))]
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, ApiError> {
        let raw = self.execute(self.post("/productos").json(product)).await?;
        decode_created(raw, CREATE)
    }

    /// Update a product. The backend answers with a plain 2xx here, no
    /// status phrase.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self, update), fields(id = %id))]
    pub async fn update_product(
        &self,
        id: &ProductId,
        update: &ProductUpdate,
    ) -> Result<(), ApiError> {
        self.execute(self.put(&format!("/productos/{id}")).json(update))
            .await?;
        Ok(())
    }

    /// Delete a product.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), ApiError> {
        self.execute(self.delete(&format!("/productos/{id}")))
            .await?;
        Ok(())
    }
}
