//! Core types for Aura.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod variant;

pub use category::{Category, CategoryParseError};
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use variant::{Size, SizeParseError, Variant};
