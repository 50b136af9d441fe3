//! Product categories.
//!
//! Categories are a closed enumeration: the catalog is hard-coded, so every
//! category a product can carry is known at compile time. Filtering by a
//! category with no products yields an empty result rather than an error.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A product category.
///
/// The first five are the main collection filters; the rest belong to the
/// accessories line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Suits,
    Ethnic,
    Shirts,
    Blazers,
    Trousers,
    Watches,
    Belts,
    Eyewear,
    Wallets,
    Ties,
    Jewelry,
    Bags,
}

impl Category {
    /// All categories shown on the collection filter bar.
    pub const COLLECTION: [Self; 5] = [
        Self::Suits,
        Self::Ethnic,
        Self::Shirts,
        Self::Blazers,
        Self::Trousers,
    ];

    /// Whether this category is part of the accessories line.
    #[must_use]
    pub const fn is_accessory(&self) -> bool {
        matches!(
            self,
            Self::Watches
                | Self::Belts
                | Self::Eyewear
                | Self::Wallets
                | Self::Ties
                | Self::Jewelry
                | Self::Bags
        )
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Suits => "Suits",
            Self::Ethnic => "Ethnic",
            Self::Shirts => "Shirts",
            Self::Blazers => "Blazers",
            Self::Trousers => "Trousers",
            Self::Watches => "Watches",
            Self::Belts => "Belts",
            Self::Eyewear => "Eyewear",
            Self::Wallets => "Wallets",
            Self::Ties => "Ties",
            Self::Jewelry => "Jewelry",
            Self::Bags => "Bags",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "suits" => Ok(Self::Suits),
            "ethnic" => Ok(Self::Ethnic),
            "shirts" => Ok(Self::Shirts),
            "blazers" => Ok(Self::Blazers),
            "trousers" => Ok(Self::Trousers),
            "watches" => Ok(Self::Watches),
            "belts" => Ok(Self::Belts),
            "eyewear" => Ok(Self::Eyewear),
            "wallets" => Ok(Self::Wallets),
            "ties" => Ok(Self::Ties),
            "jewelry" => Ok(Self::Jewelry),
            "bags" => Ok(Self::Bags),
            other => Err(CategoryParseError(other.to_string())),
        }
    }
}
