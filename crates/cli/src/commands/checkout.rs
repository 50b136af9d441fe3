//! Checkout summary: shipping address, totals, and promo handling.

use aura_store::checkout::{FREE_SHIPPING_THRESHOLD_RUPEES, OrderSummary, PromoCode};

use crate::Stores;

/// Render the order summary panel for the current bag.
pub fn summary(stores: &Stores, promo: Option<&str>) -> aura_store::Result<()> {
    let items = stores.cart.items();

    if items.is_empty() {
        println!("Your bag is empty");
        println!("Start your journey with our latest collections: `aura shop`");
        return Ok(());
    }

    // Invalid codes render a notification and the summary proceeds without
    // a discount, matching the storefront behavior.
    let code = promo.and_then(|input| match PromoCode::parse(input) {
        Ok(code) => {
            println!("Coupon Applied: 20% Off!");
            Some(code)
        }
        Err(e) => {
            println!("Invalid Coupon Code ({})", e.0);
            None
        }
    });

    let order = OrderSummary::compute(&items, code);

    if let Some(address) = stores.addresses.default_address() {
        println!();
        println!("Shipping To [{}]", address.label);
        println!("{}", address.short_form());
        println!("{} - {}", address.state, address.zip);
    }

    println!();
    println!("Order Summary");
    println!("  Subtotal  {}", order.subtotal);
    if order.free_shipping() {
        println!("  Shipping  Free");
    } else {
        println!("  Shipping  {}", order.shipping);
    }
    if !order.discount.is_zero() {
        println!("  Discount  -{}", order.discount);
    }
    println!("  Total     {}", order.total);

    println!();
    println!(
        "Free express delivery on all orders above \u{20b9}{FREE_SHIPPING_THRESHOLD_RUPEES}"
    );
    Ok(())
}
