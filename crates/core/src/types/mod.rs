//! Core types for the Craftica client.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod reaction;

pub use email::{Email, EmailError};
pub use id::*;
pub use price::Price;
pub use reaction::ReactionKind;
