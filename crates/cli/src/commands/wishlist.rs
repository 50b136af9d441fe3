//! Wishlist commands.

use aura_core::{ProductId, Size, Variant};
use aura_store::default_move_variant;

use crate::Stores;

/// Toggle a product's wishlist membership.
pub fn toggle(stores: &Stores, id: ProductId) -> aura_store::Result<()> {
    let Some(product) = stores.catalog.get(id) else {
        println!("Product {id} not found.");
        println!("Browse the collection with `aura shop`.");
        return Ok(());
    };

    if stores.wishlist.toggle(product)? {
        println!("Added {} to Wishlist", product.name);
    } else {
        println!("Removed {} from Wishlist", product.name);
    }
    Ok(())
}

/// Render the saved items.
pub fn list(stores: &Stores) {
    let items = stores.wishlist.items();

    let noun = if items.len() == 1 { "item" } else { "items" };
    println!("Your Wardrobe \u{2014} {} {noun} saved for later", items.len());

    if items.is_empty() {
        println!("Explore our latest collection to find something you love: `aura shop`");
        return;
    }

    println!();
    for item in &items {
        let old = item
            .old_price
            .map(|p| format!("  (was {p})"))
            .unwrap_or_default();
        println!(
            "#{:<4} {:<22} {:<9} {}{old}",
            item.id, item.name, item.category, item.price
        );
    }
    println!();
    println!("Move an item to the bag with `aura wishlist move <id>`.");
}

/// Remove a saved item.
pub fn remove(stores: &Stores, id: ProductId) -> aura_store::Result<()> {
    let before = stores.wishlist.count();
    let items = stores.wishlist.remove(id)?;

    if items.len() == before {
        println!("Product {id} is not in your wishlist.");
    } else {
        println!("Removed product {id} from your wishlist");
    }
    Ok(())
}

/// Move a saved item into the bag, with an optional explicit variant.
pub fn move_to_bag(
    stores: &Stores,
    id: ProductId,
    size: Option<Size>,
    color: Option<String>,
) -> aura_store::Result<()> {
    let variant = match (size, color) {
        (None, None) => None,
        (size, color) => {
            let default = default_move_variant();
            Some(Variant::new(
                size.unwrap_or(default.size),
                color.unwrap_or(default.color),
            ))
        }
    };

    match stores.wishlist.move_to_bag(id, &stores.cart, variant)? {
        Some(item) => println!("Moved {} to Bag", item.name),
        None => println!("Product {id} is not in your wishlist."),
    }
    Ok(())
}
