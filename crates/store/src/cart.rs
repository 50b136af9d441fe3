//! The shopping bag.
//!
//! Bag rows are keyed by the full variant key `(product id, size, color)`:
//! adding the same variant again merges into the existing row, while a second
//! size of the same suit gets its own row. Quantity updates and removals key
//! on the same triple, so two variants of one product never move in lockstep.
//!
//! Every mutation re-reads the persisted collection, applies the change, and
//! writes the whole collection back before returning. An absent or corrupt
//! slot reads as an empty bag.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use aura_core::{Category, Price, ProductId, Size, Variant};

use crate::catalog::Product;
use crate::error::Result;
use crate::events::{ChangeNotifier, Collection};
use crate::storage::{CART_SLOT, StorageBackend};

/// The fields of a product captured into a bag or wishlist entry at add time.
///
/// Entries are snapshots: a later catalog price change does not touch rows
/// already in the bag.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub category: Category,
}

impl From<&Product> for ProductSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category,
        }
    }
}

/// One bag row: a product snapshot plus the chosen variant and quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub category: Category,
    pub size: Size,
    pub color: String,
    pub quantity: u32,
}

impl LineItem {
    /// The `(id, size, color)` triple identifying this row.
    #[must_use]
    pub fn key(&self) -> VariantKey {
        VariantKey {
            id: self.id,
            size: self.size,
            color: self.color.clone(),
        }
    }

    /// Price for the whole row (`unit price x quantity`).
    #[must_use]
    pub fn line_price(&self) -> Price {
        self.price.times(self.quantity)
    }
}

/// The triple distinguishing bag rows for the same product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantKey {
    pub id: ProductId,
    pub size: Size,
    pub color: String,
}

impl VariantKey {
    /// Build a key from a product id and variant.
    #[must_use]
    pub fn new(id: ProductId, variant: &Variant) -> Self {
        Self {
            id,
            size: variant.size,
            color: variant.color.clone(),
        }
    }

    fn matches(&self, item: &LineItem) -> bool {
        self.id == item.id && self.size == item.size && self.color == item.color
    }
}

/// Persistent shopping bag over a storage backend.
pub struct CartStore {
    backend: Arc<dyn StorageBackend>,
    notifier: Arc<ChangeNotifier>,
}

impl CartStore {
    /// Create a bag store over the given backend and notifier.
    #[must_use]
    pub fn new(backend: Arc<dyn StorageBackend>, notifier: Arc<ChangeNotifier>) -> Self {
        Self { backend, notifier }
    }

    /// Current bag contents, in insertion order.
    ///
    /// An absent slot is an empty bag. A corrupt slot is also an empty bag:
    /// the failure is logged, never surfaced.
    #[must_use]
    pub fn items(&self) -> Vec<LineItem> {
        let text = match self.backend.read(CART_SLOT) {
            Ok(Some(text)) => text,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read bag slot: {e}");
                return Vec::new();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!("Discarding unparseable bag state: {e}");
            Vec::new()
        })
    }

    /// Number of rows in the bag (distinct variants).
    #[must_use]
    pub fn count(&self) -> usize {
        self.items().len()
    }

    /// Total units across all rows.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.items().iter().map(|item| item.quantity).sum()
    }

    /// Add `quantity` units of a product variant to the bag.
    ///
    /// Merges into the existing row when the variant key matches; otherwise
    /// appends a new row. Quantities below 1 are treated as 1.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated bag cannot be persisted.
    pub fn add(
        &self,
        product: impl Into<ProductSnapshot>,
        variant: Variant,
        quantity: u32,
    ) -> Result<Vec<LineItem>> {
        let snapshot = product.into();
        let quantity = quantity.max(1);
        let key = VariantKey::new(snapshot.id, &variant);

        let mut items = self.items();
        if let Some(existing) = items.iter_mut().find(|item| key.matches(item)) {
            existing.quantity = existing.quantity.saturating_add(quantity);
        } else {
            items.push(LineItem {
                id: snapshot.id,
                name: snapshot.name,
                price: snapshot.price,
                image: snapshot.image,
                category: snapshot.category,
                size: variant.size,
                color: variant.color,
                quantity,
            });
        }

        self.persist(&items)?;
        Ok(items)
    }

    /// Adjust a row's quantity by `delta`, clamping at 1.
    ///
    /// A key matching no row leaves the bag untouched and persists nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated bag cannot be persisted.
    pub fn update_quantity(&self, key: &VariantKey, delta: i64) -> Result<Vec<LineItem>> {
        let mut items = self.items();
        let Some(item) = items.iter_mut().find(|item| key.matches(item)) else {
            return Ok(items);
        };

        let updated = i64::from(item.quantity).saturating_add(delta).max(1);
        item.quantity = u32::try_from(updated).unwrap_or(u32::MAX);

        self.persist(&items)?;
        Ok(items)
    }

    /// Remove the row matching the variant key.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated bag cannot be persisted.
    pub fn remove(&self, key: &VariantKey) -> Result<Vec<LineItem>> {
        let mut items = self.items();
        let before = items.len();
        items.retain(|item| !key.matches(item));

        if items.len() != before {
            self.persist(&items)?;
        }
        Ok(items)
    }

    /// Empty the bag.
    ///
    /// # Errors
    ///
    /// Returns an error if the empty bag cannot be persisted.
    pub fn clear(&self) -> Result<()> {
        self.persist(&[])
    }

    fn persist(&self, items: &[LineItem]) -> Result<()> {
        let text = serde_json::to_string(items)?;
        self.backend.write(CART_SLOT, &text)?;
        self.notifier.notify(Collection::Cart);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::storage::MemoryBackend;

    fn store() -> CartStore {
        CartStore::new(
            Arc::new(MemoryBackend::new()),
            Arc::new(ChangeNotifier::new()),
        )
    }

    fn navy_m() -> Variant {
        Variant::new(Size::M, "Navy")
    }

    #[test]
    fn test_add_merges_same_variant() {
        let catalog = Catalog::seeded();
        let suit = catalog.get(ProductId::new(1)).unwrap();
        let cart = store();

        cart.add(suit, navy_m(), 1).unwrap();
        cart.add(suit, navy_m(), 2).unwrap();

        let items = cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().map(|i| i.quantity), Some(3));
    }

    #[test]
    fn test_add_keeps_variants_separate() {
        let catalog = Catalog::seeded();
        let suit = catalog.get(ProductId::new(1)).unwrap();
        let cart = store();

        cart.add(suit, Variant::new(Size::M, "Navy"), 1).unwrap();
        cart.add(suit, Variant::new(Size::L, "Navy"), 1).unwrap();
        cart.add(suit, Variant::new(Size::M, "Black"), 1).unwrap();

        assert_eq!(cart.count(), 3);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn test_add_clamps_zero_quantity_to_one() {
        let catalog = Catalog::seeded();
        let shirt = catalog.get(ProductId::new(3)).unwrap();
        let cart = store();

        cart.add(shirt, navy_m(), 0).unwrap();
        assert_eq!(cart.items().first().map(|i| i.quantity), Some(1));
    }

    #[test]
    fn test_update_quantity_clamps_at_one() {
        let catalog = Catalog::seeded();
        let suit = catalog.get(ProductId::new(1)).unwrap();
        let cart = store();

        let items = cart.add(suit, navy_m(), 2).unwrap();
        let key = items.first().map(LineItem::key).unwrap();

        let items = cart.update_quantity(&key, -5).unwrap();
        assert_eq!(items.first().map(|i| i.quantity), Some(1));

        let items = cart.update_quantity(&key, 3).unwrap();
        assert_eq!(items.first().map(|i| i.quantity), Some(4));
    }

    #[test]
    fn test_update_quantity_targets_only_the_matching_variant() {
        let catalog = Catalog::seeded();
        let suit = catalog.get(ProductId::new(1)).unwrap();
        let cart = store();

        cart.add(suit, Variant::new(Size::M, "Navy"), 1).unwrap();
        let items = cart.add(suit, Variant::new(Size::L, "Navy"), 1).unwrap();

        let l_key = items
            .iter()
            .find(|i| i.size == Size::L)
            .map(LineItem::key)
            .unwrap();
        let items = cart.update_quantity(&l_key, 2).unwrap();

        let m_qty = items.iter().find(|i| i.size == Size::M).map(|i| i.quantity);
        let l_qty = items.iter().find(|i| i.size == Size::L).map(|i| i.quantity);
        assert_eq!(m_qty, Some(1));
        assert_eq!(l_qty, Some(3));
    }

    #[test]
    fn test_update_quantity_unknown_key_is_noop() {
        let catalog = Catalog::seeded();
        let suit = catalog.get(ProductId::new(1)).unwrap();
        let cart = store();

        cart.add(suit, navy_m(), 1).unwrap();
        let ghost = VariantKey::new(ProductId::new(999), &navy_m());
        let items = cart.update_quantity(&ghost, 5).unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items.first().map(|i| i.quantity), Some(1));
    }

    #[test]
    fn test_remove_then_re_add_restores_cardinality() {
        let catalog = Catalog::seeded();
        let suit = catalog.get(ProductId::new(1)).unwrap();
        let shirt = catalog.get(ProductId::new(3)).unwrap();
        let cart = store();

        cart.add(suit, navy_m(), 1).unwrap();
        cart.add(shirt, navy_m(), 1).unwrap();
        let before = cart.count();

        let key = VariantKey::new(suit.id, &navy_m());
        cart.remove(&key).unwrap();
        assert_eq!(cart.count(), before - 1);

        cart.add(suit, navy_m(), 1).unwrap();
        assert_eq!(cart.count(), before);
    }

    #[test]
    fn test_clear_empties_the_bag() {
        let catalog = Catalog::seeded();
        let suit = catalog.get(ProductId::new(1)).unwrap();
        let cart = store();

        cart.add(suit, navy_m(), 2).unwrap();
        cart.clear().unwrap();
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_corrupt_slot_reads_as_empty() {
        let backend = Arc::new(MemoryBackend::new());
        backend.write(CART_SLOT, "not json at all").unwrap();
        let cart = CartStore::new(backend, Arc::new(ChangeNotifier::new()));

        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let catalog = Catalog::seeded();
        let cart = store();
        for id in [4, 1, 3] {
            let product = catalog.get(ProductId::new(id)).unwrap();
            cart.add(product, navy_m(), 1).unwrap();
        }

        let ids: Vec<i32> = cart.items().iter().map(|i| i.id.as_i32()).collect();
        assert_eq!(ids, vec![4, 1, 3]);
    }

    #[test]
    fn test_mutations_notify_cart_collection() {
        let catalog = Catalog::seeded();
        let suit = catalog.get(ProductId::new(1)).unwrap();
        let notifier = Arc::new(ChangeNotifier::new());
        let cart = CartStore::new(Arc::new(MemoryBackend::new()), Arc::clone(&notifier));

        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        notifier.subscribe(move |collection| sink.lock().unwrap().push(collection));

        cart.add(suit, navy_m(), 1).unwrap();
        let key = VariantKey::new(suit.id, &navy_m());
        cart.update_quantity(&key, 1).unwrap();
        cart.remove(&key).unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Collection::Cart, Collection::Cart, Collection::Cart]
        );
    }
}
