//! Integration tests for Aura.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aura-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `persistence` - File-backed slots across store instances: reload,
//!   corruption recovery, last-writer-wins
//! - `storefront_flows` - Cross-store shopping flows: bag merging, wishlist
//!   round trips, move-to-bag, checkout totals
