//! Collection browsing and product detail.

use aura_core::ProductId;
use aura_store::catalog::{CategoryFilter, Product};

use crate::Stores;

/// List products matching the filter, with wishlist markers.
pub fn list(stores: &Stores, filter: CategoryFilter) {
    let products = stores.catalog.filter(filter);

    if products.is_empty() {
        println!("No products found in this category.");
        println!("Run `aura shop` to clear filters.");
        return;
    }

    println!("{} \u{2014} {} products", filter, products.len());
    println!();
    for product in products {
        let heart = if stores.wishlist.contains(product.id) {
            "\u{2665} "
        } else {
            "  "
        };
        let tag = product
            .tag
            .as_deref()
            .map(|t| format!("  [{t}]"))
            .unwrap_or_default();
        println!(
            "{heart}#{:<4} {:<22} {:<9} {}{}",
            product.id, product.name, product.category, product.price, tag
        );
    }
}

/// Show one product in detail, or the not-found state.
pub fn detail(stores: &Stores, id: ProductId) {
    let Some(product) = stores.catalog.get(id) else {
        println!("Product {id} not found.");
        println!("Browse the collection with `aura shop`.");
        return;
    };

    print_detail(stores, product);
}

fn print_detail(stores: &Stores, product: &Product) {
    println!("{}", product.name);
    if let Some(tag) = &product.tag {
        println!("[{tag}]");
    }

    match (product.rating, product.reviews) {
        (rating, Some(reviews)) => println!("\u{2605} {rating} ({reviews} reviews)"),
        (rating, None) => println!("\u{2605} {rating}"),
    }

    match product.old_price {
        Some(old) => {
            let percent = product
                .discount_percent()
                .map(|p| format!("  {p}% OFF"))
                .unwrap_or_default();
            println!("{}  (was {old}){percent}", product.price);
        }
        None => println!("{}", product.price),
    }

    if let Some(description) = &product.description {
        println!();
        println!("{description}");
    }

    if !product.sizes.is_empty() {
        let sizes: Vec<&str> = product.sizes.iter().map(|s| s.label()).collect();
        println!();
        println!("Sizes:  {}", sizes.join(" "));
    }
    if !product.colors.is_empty() {
        println!("Colors: {}", product.colors.join(", "));
    }

    println!();
    if stores.wishlist.contains(product.id) {
        println!("\u{2665} In your wishlist");
    }
    println!("Add to bag with `aura bag add {}`.", product.id);
}
