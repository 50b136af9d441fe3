//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored in the currency's standard unit (whole rupees for INR,
//! dollars for USD) and formatted for display with the currency's digit
//! grouping. Catalog prices are whole-unit amounts, so display rounds to zero
//! fraction digits with half-away-from-zero rounding.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rupees, not paise).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create an INR price from a whole-rupee amount.
    #[must_use]
    pub fn from_rupees(rupees: i64) -> Self {
        Self::new(Decimal::from(rupees), CurrencyCode::INR)
    }

    /// The price for `quantity` units at this unit price.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Whether the amount is zero (used to render "Free" shipping).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rounded = self
            .amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let digits = rounded.abs().to_string();
        let grouped = match self.currency_code {
            CurrencyCode::INR => group_indian(&digits),
            _ => group_western(&digits),
        };
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        write!(f, "{sign}{}{grouped}", self.currency_code.symbol())
    }
}

/// Group a digit string in the Indian numbering style: the last three digits
/// form one group, every two digits before that form another (12,34,567).
fn group_indian(digits: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(len - 3);
    let mut groups = Vec::new();
    let head_bytes = head.as_bytes();
    let mut end = head_bytes.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// Group a digit string in thousands (1,234,567).
fn group_western(digits: &str) -> String {
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Currency symbol for display.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::INR => "\u{20b9}",
            Self::USD => "$",
            Self::EUR => "\u{20ac}",
            Self::GBP => "\u{a3}",
        }
    }

    /// ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::INR => "INR",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_short_amounts_ungrouped() {
        assert_eq!(Price::from_rupees(899).to_string(), "\u{20b9}899");
        assert_eq!(Price::from_rupees(0).to_string(), "\u{20b9}0");
    }

    #[test]
    fn test_display_indian_grouping() {
        assert_eq!(Price::from_rupees(8499).to_string(), "\u{20b9}8,499");
        assert_eq!(Price::from_rupees(14999).to_string(), "\u{20b9}14,999");
        assert_eq!(Price::from_rupees(123_456).to_string(), "\u{20b9}1,23,456");
        assert_eq!(
            Price::from_rupees(12_345_678).to_string(),
            "\u{20b9}1,23,45,678"
        );
    }

    #[test]
    fn test_display_western_grouping() {
        let price = Price::new(Decimal::from(1_234_567), CurrencyCode::USD);
        assert_eq!(price.to_string(), "$1,234,567");
    }

    #[test]
    fn test_display_rounds_fractions_half_up() {
        let price = Price::new(Decimal::new(24995, 1), CurrencyCode::INR); // 2499.5
        assert_eq!(price.to_string(), "\u{20b9}2,500");
    }

    #[test]
    fn test_times() {
        let line = Price::from_rupees(2199).times(3);
        assert_eq!(line.amount, Decimal::from(6597));
        assert_eq!(line.currency_code, CurrencyCode::INR);
    }
}
