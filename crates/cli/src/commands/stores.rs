//! Store browsing commands.

use craftica_client::models::StoreFilter;

use super::{CliError, resources};

/// List stores matching the given filters.
pub async fn list(
    page: Option<u32>,
    limit: Option<u32>,
    city: Option<String>,
    country: Option<String>,
) -> Result<(), CliError> {
    let resources = resources()?;
    let filter = StoreFilter {
        page,
        limit,
        city,
        country,
    };
    let stores = resources.stores(&filter).await?;

    tracing::info!(
        "Page {}/{} ({} stores total)",
        stores.page,
        stores.total_pages,
        stores.total
    );
    for store in &stores.data {
        let place = store
            .location
            .as_ref()
            .map_or_else(String::new, |l| format!(" - {}, {}", l.city, l.country));
        tracing::info!("  [{}] {}{}", store.id, store.name, place);
    }
    Ok(())
}

/// Show one store by id.
pub async fn show(id: &str) -> Result<(), CliError> {
    let resources = resources()?;
    let Some(store) = resources.store(Some(id)).await? else {
        return Err(CliError::InvalidInput(format!("invalid store id: {id}")));
    };

    tracing::info!("Store {}", store.id);
    tracing::info!("  Name: {}", store.name);
    if let Some(rating) = store.rating {
        tracing::info!("  Rating: {rating:.1}");
    }
    if let Some(location) = &store.location {
        tracing::info!(
            "  Location: {}, {}, {}",
            location.address,
            location.city,
            location.country
        );
    }
    Ok(())
}
