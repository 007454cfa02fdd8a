//! Craftica Core - Shared types library.
//!
//! This crate provides common types used across the Craftica client
//! components:
//! - `client` - Resource adapter, session, and resource cache
//! - `cli` - Command-line marketplace browser
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, prices, and
//!   reaction kinds

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
