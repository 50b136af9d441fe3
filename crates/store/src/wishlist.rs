//! The wishlist ("Your Wardrobe").
//!
//! Wishlist entries are product snapshots keyed by id alone - no variant is
//! chosen until the item moves to the bag. Toggling is the only add path, so
//! membership can never duplicate.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use aura_core::{Category, Price, ProductId, Size, Variant};

use crate::cart::{CartStore, ProductSnapshot};
use crate::catalog::Product;
use crate::error::Result;
use crate::events::{ChangeNotifier, Collection};
use crate::storage::{StorageBackend, WISHLIST_SLOT};

/// One saved-for-later product snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub old_price: Option<Price>,
    pub image: String,
    pub category: Category,
}

impl From<&Product> for WishlistItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            old_price: product.old_price,
            image: product.image.clone(),
            category: product.category,
        }
    }
}

impl From<&WishlistItem> for ProductSnapshot {
    fn from(item: &WishlistItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            category: item.category,
        }
    }
}

/// The variant used when an item moves from the wishlist to the bag and the
/// caller does not choose one. Wishlist entries carry no size or color, so
/// this substitution is an explicit product decision, not a silent fallback.
#[must_use]
pub fn default_move_variant() -> Variant {
    Variant::new(Size::M, "Standard")
}

/// Persistent wishlist over a storage backend.
pub struct WishlistStore {
    backend: Arc<dyn StorageBackend>,
    notifier: Arc<ChangeNotifier>,
}

impl WishlistStore {
    /// Create a wishlist store over the given backend and notifier.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>, notifier: Arc<ChangeNotifier>) -> Self {
        Self { backend, notifier }
    }

    /// Current wishlist contents, in insertion order.
    ///
    /// Absent and corrupt slots both read as empty; corruption is logged.
    #[must_use]
    pub fn items(&self) -> Vec<WishlistItem> {
        let text = match self.backend.read(WISHLIST_SLOT) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read wishlist slot: {e}");
                return Vec::new();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!("Discarding unparseable wishlist state: {e}");
            Vec::new()
        })
    }

    /// Whether a product is currently saved.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.items().iter().any(|item| item.id == id)
    }

    /// Number of saved items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items().len()
    }

    /// Toggle a product's membership, returning the resulting state
    /// (`true` if the product is now saved).
    ///
    /// The snapshot captures the product's price, image, and category at
    /// toggle time.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated wishlist cannot be persisted.
    pub fn toggle(&self, product: &Product) -> Result<bool> {
        let mut items = self.items();
        let saved = if items.iter().any(|item| item.id == product.id) {
            items.retain(|item| item.id != product.id);
            false
        } else {
            items.push(WishlistItem::from(product));
            true
        };

        self.persist(&items)?;
        Ok(saved)
    }

    /// Remove a product by id. Unknown ids leave the wishlist untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated wishlist cannot be persisted.
    pub fn remove(&self, id: ProductId) -> Result<Vec<WishlistItem>> {
        let mut items = self.items();
        let before = items.len();
        items.retain(|item| item.id != id);

        if items.len() != before {
            self.persist(&items)?;
        }
        Ok(items)
    }

    /// Move a saved item into the bag.
    ///
    /// Removes the item from the wishlist, then adds one unit to the bag
    /// under `variant`, or [`default_move_variant`] when none is given.
    /// Returns the moved item, or `None` when the id is not saved (the
    /// wishlist is left untouched).
    ///
    /// # Errors
    ///
    /// Returns an error if either collection cannot be persisted.
    pub fn move_to_bag(
        &self,
        id: ProductId,
        cart: &CartStore,
        variant: Option<Variant>,
    ) -> Result<Option<WishlistItem>> {
        let mut items = self.items();
        let Some(position) = items.iter().position(|item| item.id == id) else {
            return Ok(None);
        };
        let item = items.remove(position);

        self.persist(&items)?;
        cart.add(&item, variant.unwrap_or_else(default_move_variant), 1)?;
        Ok(Some(item))
    }

    /// Empty the wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error if the empty wishlist cannot be persisted.
    pub fn clear(&self) -> Result<()> {
        self.persist(&[])
    }

    fn persist(&self, items: &[WishlistItem]) -> Result<()> {
        let text = serde_json::to_string(items)?;
        self.backend.write(WISHLIST_SLOT, &text)?;
        self.notifier.notify(Collection::Wishlist);
        Ok(())
    }
}
