//! Shopping bag commands.

use aura_core::{ProductId, Size, Variant};
use aura_store::cart::VariantKey;

use crate::Stores;

/// Add a product variant to the bag.
pub fn add(
    stores: &Stores,
    id: ProductId,
    size: Size,
    color: String,
    quantity: u32,
) -> aura_store::Result<()> {
    let Some(product) = stores.catalog.get(id) else {
        println!("Product {id} not found.");
        println!("Browse the collection with `aura shop`.");
        return Ok(());
    };

    stores.cart.add(product, Variant::new(size, color), quantity)?;
    println!("Added {} to Bag", product.name);
    Ok(())
}

/// Render the bag contents and row count.
pub fn list(stores: &Stores) {
    let items = stores.cart.items();

    if items.is_empty() {
        println!("Your bag is empty");
        println!("Start your journey with our latest collections: `aura shop`");
        return;
    }

    println!("Shopping Bag ({} Items)", items.len());
    println!();
    for item in &items {
        println!("#{:<4} {}", item.id, item.name);
        println!(
            "      {}  \u{2022}  {} x {} = {}",
            Variant::new(item.size, item.color.clone()),
            item.quantity,
            item.price,
            item.line_price()
        );
    }
    println!();
    println!("Review totals with `aura checkout`.");
}

/// Adjust a row's quantity by `delta`.
pub fn update(
    stores: &Stores,
    id: ProductId,
    size: Size,
    color: String,
    delta: i64,
) -> aura_store::Result<()> {
    let key = VariantKey {
        id,
        size,
        color,
    };
    let items = stores.cart.update_quantity(&key, delta)?;

    match items.iter().find(|item| item.key() == key) {
        Some(item) => println!("{} \u{2192} quantity {}", item.name, item.quantity),
        None => println!("No matching bag row for product {id} ({size}, {})", key.color),
    }
    Ok(())
}

/// Remove a row from the bag.
pub fn remove(
    stores: &Stores,
    id: ProductId,
    size: Size,
    color: String,
) -> aura_store::Result<()> {
    let key = VariantKey { id, size, color };
    let before = stores.cart.count();
    let items = stores.cart.remove(&key)?;

    if items.len() == before {
        println!("No matching bag row for product {id} ({size}, {})", key.color);
    } else {
        println!("Removed product {id} from the bag");
    }
    Ok(())
}

/// Empty the bag.
pub fn clear(stores: &Stores) -> aura_store::Result<()> {
    stores.cart.clear()?;
    println!("Your bag is empty");
    Ok(())
}
