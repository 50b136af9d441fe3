//! Aura Store - client-side storefront state.
//!
//! This crate holds everything the Aura storefront keeps on the client: the
//! shopping bag, the wishlist, the hard-coded catalog, the mock address book,
//! and the checkout totals. There is no backend; collections persist through a
//! pluggable [`storage::StorageBackend`] (a JSON-file slot per collection,
//! standing in for browser local storage) and re-load on every read.
//!
//! # Modules
//!
//! - [`storage`] - The persistence port and its in-memory and file backends
//! - [`events`] - Typed change notifications for mounted views
//! - [`cart`] - Shopping bag line items keyed by `(product, size, color)`
//! - [`wishlist`] - Saved-for-later product snapshots keyed by product id
//! - [`checkout`] - Order totals, shipping threshold, and promo codes
//! - [`catalog`] - The hard-coded product catalog with category filtering
//! - [`addresses`] - Read-only mock shipping addresses
//! - [`error`] - Unified error type for store operations
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use aura_core::{Size, Variant};
//! use aura_store::cart::CartStore;
//! use aura_store::catalog::Catalog;
//! use aura_store::events::ChangeNotifier;
//! use aura_store::storage::MemoryBackend;
//!
//! let backend = Arc::new(MemoryBackend::new());
//! let notifier = Arc::new(ChangeNotifier::new());
//! let cart = CartStore::new(backend, notifier);
//!
//! let catalog = Catalog::seeded();
//! let suit = catalog.get(1.into()).unwrap();
//! cart.add(suit, Variant::new(Size::L, "Navy"), 1).unwrap();
//! assert_eq!(cart.items().len(), 1);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod addresses;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod events;
pub mod storage;
pub mod wishlist;

pub use addresses::{Address, AddressBook, AddressLabel};
pub use cart::{CartStore, LineItem, ProductSnapshot, VariantKey};
pub use catalog::{Catalog, CategoryFilter, Product};
pub use checkout::{OrderSummary, PromoCode, PromoError};
pub use error::{Result, StoreError};
pub use events::{ChangeNotifier, Collection, SubscriptionId};
pub use storage::{FileBackend, MemoryBackend, StorageBackend};
pub use wishlist::{WishlistItem, WishlistStore, default_move_variant};
