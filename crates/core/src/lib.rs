//! Aura Core - Shared types library.
//!
//! This crate provides common types used across all Aura components:
//! - `store` - Cart, wishlist, catalog, and checkout state
//! - `cli` - Command-line storefront client
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, categories, and
//!   product variants

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
