//! Cross-store shopping flows.
//!
//! End-to-end walks through the storefront behaviors: repeated adds merging
//! into one row, wishlist toggles round-tripping, move-to-bag shifting items
//! between collections, and checkout totals over a real bag.

use std::sync::{Arc, Mutex};

use aura_core::{ProductId, Size, Variant};
use aura_store::checkout::{OrderSummary, PromoCode};
use aura_store::{
    CartStore, Catalog, ChangeNotifier, Collection, MemoryBackend, StorageBackend, WishlistStore,
};

struct Shop {
    catalog: Catalog,
    cart: CartStore,
    wishlist: WishlistStore,
    notifier: Arc<ChangeNotifier>,
}

impl Shop {
    fn new() -> Self {
        let backend: Arc<dyn StorageBackend> = Arc::new(MemoryBackend::new());
        let notifier = Arc::new(ChangeNotifier::new());
        Self {
            catalog: Catalog::seeded(),
            cart: CartStore::new(Arc::clone(&backend), Arc::clone(&notifier)),
            wishlist: WishlistStore::new(backend, Arc::clone(&notifier)),
            notifier,
        }
    }

    fn product(&self, id: i32) -> &aura_store::Product {
        self.catalog.get(ProductId::new(id)).expect("seeded product")
    }
}

#[test]
fn test_repeated_adds_merge_to_one_row_with_summed_quantity() {
    let shop = Shop::new();
    let suit = shop.product(1);
    let variant = || Variant::new(Size::L, "Navy");

    for qty in [1, 2, 3] {
        shop.cart.add(suit, variant(), qty).expect("add");
    }

    let items = shop.cart.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items.first().map(|i| i.quantity), Some(6));
}

#[test]
fn test_move_to_bag_shifts_cardinality() {
    let shop = Shop::new();
    let watch = shop.product(201);
    let belt = shop.product(202);

    shop.wishlist.toggle(watch).expect("toggle");
    shop.wishlist.toggle(belt).expect("toggle");

    let wishlist_before = shop.wishlist.count();
    let cart_rows_before = shop.cart.count();

    shop.wishlist
        .move_to_bag(watch.id, &shop.cart, None)
        .expect("move");

    assert_eq!(shop.wishlist.count(), wishlist_before - 1);
    assert_eq!(shop.cart.count(), cart_rows_before + 1);

    // Moving the second item onto an existing variant row adds units, not rows.
    shop.cart
        .add(belt, aura_store::default_move_variant(), 1)
        .expect("add");
    let cart_rows_before = shop.cart.count();
    shop.wishlist
        .move_to_bag(belt.id, &shop.cart, None)
        .expect("move");
    assert_eq!(shop.cart.count(), cart_rows_before);
    assert!(shop.wishlist.items().is_empty());
}

#[test]
fn test_checkout_totals_over_a_real_bag() {
    let shop = Shop::new();
    // Linen Shirt at 2199 clears the 2000 threshold on its own.
    shop.cart
        .add(shop.product(3), Variant::new(Size::M, "Standard"), 1)
        .expect("add");

    let no_promo = OrderSummary::compute(&shop.cart.items(), None);
    assert!(no_promo.free_shipping());
    assert_eq!(no_promo.total.to_string(), "\u{20b9}2,199");

    // Shipping keys off the undiscounted subtotal, so the order still ships
    // free even though the discounted total lands below the threshold.
    let code = PromoCode::parse("aura20").expect("valid code");
    let with_promo = OrderSummary::compute(&shop.cart.items(), Some(code));
    assert_eq!(with_promo.discount.to_string(), "\u{20b9}440");
    assert_eq!(with_promo.total.to_string(), "\u{20b9}1,759");
    assert!(with_promo.free_shipping());
}

#[test]
fn test_wishlist_toggle_round_trip_leaves_no_trace() {
    let shop = Shop::new();
    let suit = shop.product(1);
    let shirt = shop.product(8);

    shop.wishlist.toggle(shirt).expect("toggle");
    let snapshot = shop.wishlist.items();

    assert!(shop.wishlist.toggle(suit).expect("toggle on"));
    assert!(!shop.wishlist.toggle(suit).expect("toggle off"));

    assert_eq!(shop.wishlist.items(), snapshot);
}

#[test]
fn test_notifications_name_the_mutated_collection() {
    let shop = Shop::new();
    let suit = shop.product(1);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let subscription = shop
        .notifier
        .subscribe(move |collection| sink.lock().expect("lock").push(collection));

    shop.wishlist.toggle(suit).expect("toggle");
    shop.wishlist
        .move_to_bag(suit.id, &shop.cart, None)
        .expect("move");

    // Toggle touches the wishlist; the move touches the wishlist then the bag.
    assert_eq!(
        *seen.lock().expect("lock"),
        vec![Collection::Wishlist, Collection::Wishlist, Collection::Cart]
    );

    shop.notifier.unsubscribe(subscription);
    shop.cart.clear().expect("clear");
    assert_eq!(seen.lock().expect("lock").len(), 3);
}

#[test]
fn test_bag_prices_are_snapshots_not_live_links() {
    let shop = Shop::new();
    let suit = shop.product(1);

    shop.cart
        .add(suit, Variant::new(Size::M, "Navy"), 1)
        .expect("add");

    let line = shop.cart.items().into_iter().next().expect("line");
    assert_eq!(line.price, suit.price);
    assert_eq!(line.name, suit.name);
    assert_eq!(line.category, suit.category);
}
