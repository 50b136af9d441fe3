//! Product variants: the size and color chosen when adding to the bag.
//!
//! Cart rows for the same product are distinguished by their variant, so two
//! sizes of one suit occupy separate lines.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Garment sizes offered across the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    S,
    M,
    L,
    XL,
    XXL,
}

impl Size {
    /// The full size run, in ascending order.
    pub const ALL: [Self; 5] = [Self::S, Self::M, Self::L, Self::XL, Self::XXL];

    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::XL => "XL",
            Self::XXL => "XXL",
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown size label.
#[derive(Debug, Error)]
#[error("unknown size: {0}")]
pub struct SizeParseError(pub String);

impl FromStr for Size {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "L" => Ok(Self::L),
            "XL" => Ok(Self::XL),
            "XXL" => Ok(Self::XXL),
            other => Err(SizeParseError(other.to_string())),
        }
    }
}

/// A chosen size and color.
///
/// Colors are free-form names ("Navy", "Charcoal") because each product
/// carries its own palette; sizes are a closed run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variant {
    pub size: Size,
    pub color: String,
}

impl Variant {
    /// Create a variant.
    #[must_use]
    pub fn new(size: Size, color: impl Into<String>) -> Self {
        Self {
            size,
            color: color.into(),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Size: {} \u{2022} Color: {}", self.size, self.color)
    }
}
