//! Command implementations, one module per resource.

pub mod auth;
pub mod posts;
pub mod products;
pub mod stores;

use std::sync::Arc;

use thiserror::Error;

use craftica_client::config::ConfigError;
use craftica_client::session::SessionError;
use craftica_client::{
    ApiError, ClientConfig, CrafticaClient, FileSessionStore, MarketResources, Session,
};

/// Errors surfaced to the top-level command dispatcher.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded from the environment.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The persisted session could not be read or written.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// An API call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A cached API call failed.
    #[error("API error: {0}")]
    CachedApi(#[from] Arc<ApiError>),

    /// Input could not be parsed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Build the client stack: config from the environment, session restored
/// from the snapshot file, caching layered on top.
pub fn resources() -> Result<MarketResources, CliError> {
    let config = ClientConfig::from_env()?;
    let session = Session::restore(FileSessionStore::new(&config.session_file))?;
    let client = CrafticaClient::new(&config, session)?;
    Ok(MarketResources::new(client))
}
