//! Order totals: subtotal, shipping, promo discount, grand total.
//!
//! Totals are a pure function of the bag contents and an optional validated
//! promo code - no hidden state. Shipping is free above the threshold;
//! otherwise a flat fee applies. The single promo code takes a fixed
//! percentage off the subtotal, rounded to whole rupees.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use aura_core::{CurrencyCode, Price};

use crate::cart::LineItem;

/// Orders strictly above this subtotal (in rupees) ship free.
pub const FREE_SHIPPING_THRESHOLD_RUPEES: i64 = 2000;

/// Flat shipping fee below the free-shipping threshold, in rupees.
pub const SHIPPING_FEE_RUPEES: i64 = 150;

/// The one promo code the storefront honors, matched case-insensitively.
pub const PROMO_CODE: &str = "AURA20";

/// Percentage taken off the subtotal by [`PROMO_CODE`].
pub const PROMO_DISCOUNT_PERCENT: u32 = 20;

/// Error for promo codes the storefront does not recognize.
///
/// Rendered as the "Invalid Coupon Code" notification, never a failure state.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid coupon code: {0}")]
pub struct PromoError(pub String);

/// A promo code that has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromoCode(());

impl PromoCode {
    /// Validate a user-entered code, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `PromoError` when the code is not [`PROMO_CODE`].
    pub fn parse(input: &str) -> Result<Self, PromoError> {
        if input.trim().eq_ignore_ascii_case(PROMO_CODE) {
            Ok(Self(()))
        } else {
            Err(PromoError(input.to_string()))
        }
    }

    /// Discount for a given subtotal: 20% rounded half-up to whole rupees.
    #[must_use]
    pub fn discount(&self, subtotal: Decimal) -> Decimal {
        let fraction = Decimal::from(PROMO_DISCOUNT_PERCENT) / Decimal::from(100);
        (subtotal * fraction).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// The order summary panel: every figure the checkout renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Price,
    pub shipping: Price,
    pub discount: Price,
    pub total: Price,
}

impl OrderSummary {
    /// Compute totals for the given bag rows and optional promo code.
    #[must_use]
    pub fn compute(items: &[LineItem], promo: Option<PromoCode>) -> Self {
        let subtotal: Decimal = items
            .iter()
            .map(|item| item.price.amount * Decimal::from(item.quantity))
            .sum();

        let shipping = if subtotal > Decimal::from(FREE_SHIPPING_THRESHOLD_RUPEES) {
            Decimal::ZERO
        } else {
            Decimal::from(SHIPPING_FEE_RUPEES)
        };

        let discount = promo.map_or(Decimal::ZERO, |code| code.discount(subtotal));
        let total = subtotal - discount + shipping;

        let inr = |amount| Price::new(amount, CurrencyCode::INR);
        Self {
            subtotal: inr(subtotal),
            shipping: inr(shipping),
            discount: inr(discount),
            total: inr(total),
        }
    }

    /// Whether the order qualified for free shipping.
    #[must_use]
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
