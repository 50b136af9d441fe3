//! CLI command implementations.
//!
//! Each module maps to one top-level subcommand and renders with the same
//! copy the storefront pages use ("Your bag is empty", "Invalid Coupon
//! Code"), so the CLI reads like the site.

pub mod bag;
pub mod checkout;
pub mod shop;
pub mod wishlist;
