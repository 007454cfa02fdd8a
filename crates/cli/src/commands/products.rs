//! Product browsing commands.

use craftica_client::models::ProductFilter;
use craftica_core::StoreId;

use super::{CliError, resources};

/// List products matching the given filters.
pub async fn list(
    page: Option<u32>,
    limit: Option<u32>,
    category: Option<String>,
    store: Option<String>,
) -> Result<(), CliError> {
    let resources = resources()?;
    let filter = ProductFilter {
        page,
        limit,
        category,
        store_id: store.map(StoreId::new),
    };
    let products = resources.products(&filter).await?;

    tracing::info!(
        "Page {}/{} ({} products total)",
        products.page,
        products.total_pages,
        products.total
    );
    for product in &products.data {
        tracing::info!("  [{}] {} - {}", product.id, product.name, product.price);
    }
    Ok(())
}

/// Show one product by id.
pub async fn show(id: &str) -> Result<(), CliError> {
    let resources = resources()?;
    let Some(product) = resources.product(Some(id)).await? else {
        return Err(CliError::InvalidInput(format!("invalid product id: {id}")));
    };

    tracing::info!("Product {}", product.id);
    tracing::info!("  Name: {}", product.name);
    tracing::info!("  Price: {}", product.price);
    tracing::info!("  Categories: {}", product.categories.join(", "));
    tracing::info!("  Description: {}", product.description);
    Ok(())
}
