//! Craftica marketplace API client.
//!
//! Wraps the Craftica REST backend behind typed models, normalizes its
//! uneven response shapes into one paged envelope, and layers keyed
//! caching with request deduplication on top. Sessions persist across
//! process restarts through a pluggable store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod resources;
pub mod session;

pub use api::CrafticaClient;
pub use config::ClientConfig;
pub use error::{ApiError, EntityKind};
pub use resources::{MarketResources, ResourceKey, ResourceState};
pub use session::{FileSessionStore, MemorySessionStore, Session, SessionSnapshot, SessionStore};
