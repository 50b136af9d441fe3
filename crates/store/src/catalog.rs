//! The hard-coded product catalog.
//!
//! There is no product service behind the storefront: the collection grid,
//! best-seller rail, and accessories page all render from these in-memory
//! arrays. The catalog is loaded once and never mutated.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use aura_core::{Category, CategoryParseError, Price, ProductId, Size};

/// One catalog entry.
///
/// Prices and imagery are captured here verbatim; cart and wishlist entries
/// snapshot these fields at add time rather than linking back live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub category: Category,
    pub price: Price,
    #[serde(default)]
    pub old_price: Option<Price>,
    pub rating: f32,
    #[serde(default)]
    pub reviews: Option<u32>,
    pub image: String,
    #[serde(default)]
    pub tag: Option<String>,
    /// Size run offered for this product; empty for accessories.
    #[serde(default)]
    pub sizes: Vec<Size>,
    /// Color names offered for this product.
    #[serde(default)]
    pub colors: Vec<String>,
}

impl Product {
    /// Discount percentage against the old price, if one is set.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let old = self.old_price?;
        if old.amount <= self.price.amount {
            return None;
        }
        let ratio = (old.amount - self.price.amount) / old.amount;
        u32::try_from(
            (ratio * rust_decimal::Decimal::from(100))
                .round()
                .mantissa(),
        )
        .ok()
    }
}

/// A collection-page filter selection.
///
/// `All` is the leftmost filter chip; anything else narrows to one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            Category::from_str(s).map(Self::Only)
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(category) => category.fmt(f),
        }
    }
}

/// The full in-memory catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the catalog from the seeded product arrays.
    #[must_use]
    pub fn seeded() -> Self {
        let mut products = collection_products();
        products.extend(accessory_products());
        Self { products }
    }

    /// Every product, collection and accessories alike, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    ///
    /// A miss is a renderable "not found" state for the detail view, not an
    /// error.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products matching a collection filter.
    ///
    /// `All` returns everything; a category with no products yields an empty
    /// list.
    #[must_use]
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Product> {
        match filter {
            CategoryFilter::All => self.products.iter().collect(),
            CategoryFilter::Only(category) => self
                .products
                .iter()
                .filter(|p| p.category == category)
                .collect(),
        }
    }

    /// The main menswear collection (everything outside the accessories line).
    #[must_use]
    pub fn collection(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| !p.category.is_accessory())
            .collect()
    }

    /// The accessories line.
    #[must_use]
    pub fn accessories(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category.is_accessory())
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn clothing(
    id: i32,
    name: &str,
    description: Option<&str>,
    category: Category,
    price: i64,
    old_price: i64,
    rating: f32,
    image: &str,
    tag: Option<&str>,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: description.map(str::to_string),
        category,
        price: Price::from_rupees(price),
        old_price: Some(Price::from_rupees(old_price)),
        rating,
        reviews: None,
        image: image.to_string(),
        tag: tag.map(str::to_string),
        sizes: Size::ALL.to_vec(),
        colors: vec!["Standard".to_string()],
    }
}

fn accessory(
    id: i32,
    name: &str,
    category: Category,
    price: i64,
    old_price: i64,
    rating: f32,
    image: &str,
    tag: Option<&str>,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        description: None,
        category,
        price: Price::from_rupees(price),
        old_price: Some(Price::from_rupees(old_price)),
        rating,
        reviews: None,
        image: image.to_string(),
        tag: tag.map(str::to_string),
        sizes: Vec::new(),
        colors: vec!["Standard".to_string()],
    }
}

fn collection_products() -> Vec<Product> {
    let mut products = vec![
        clothing(
            1,
            "Royal Blue Suit",
            Some("Italian cut premium wool blend with satin lapel."),
            Category::Suits,
            8499,
            12999,
            4.9,
            "https://images.unsplash.com/photo-1593032465175-d812032760d1?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            Some("30% OFF"),
        ),
        clothing(
            2,
            "Navy Sherwani",
            Some("Hand-embroidered zardosi work on velvet."),
            Category::Ethnic,
            14999,
            18500,
            5.0,
            "https://images.unsplash.com/photo-1617127365659-c47fa864d8bc?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            Some("BESTSELLER"),
        ),
        clothing(
            3,
            "Linen Shirt",
            Some("100% organic breathable linen, perfect for summer."),
            Category::Shirts,
            2199,
            3200,
            4.6,
            "https://images.unsplash.com/photo-1596756616499-c8c7f938b8d9?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            Some("NEW"),
        ),
        clothing(
            4,
            "Classic Tuxedo",
            Some("Sharp silhouette with a single button closure."),
            Category::Suits,
            9799,
            11000,
            4.8,
            "https://images.unsplash.com/photo-1598033129183-c4f50c736f10?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            Some("HOT"),
        ),
        clothing(
            5,
            "Beige Kurta Set",
            None,
            Category::Ethnic,
            3499,
            5000,
            4.7,
            "https://images.unsplash.com/photo-1597983073493-88cd357a28e0?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            Some("FESTIVE"),
        ),
        clothing(
            6,
            "Checkered Blazer",
            None,
            Category::Suits,
            5999,
            8000,
            4.5,
            "https://images.unsplash.com/photo-1507679799987-c73779587ccf?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            Some("SALE"),
        ),
        clothing(
            7,
            "Silk Nehru Jacket",
            None,
            Category::Ethnic,
            4299,
            6500,
            4.8,
            "https://images.unsplash.com/photo-1507679799987-c73779587ccf?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            Some("TRENDING"),
        ),
        clothing(
            8,
            "White Formal Shirt",
            None,
            Category::Shirts,
            1899,
            2500,
            4.4,
            "https://images.unsplash.com/photo-1620012253295-c15cc3e65df4?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80",
            None,
        ),
    ];

    // The hero suit carries the detail-page extras: palette, review count,
    // and the long-form description.
    if let Some(suit) = products.first_mut() {
        suit.description = Some(
            "Crafted from the finest Italian wool, this navy suit defines modern \
             elegance. Featuring a slim-fit silhouette, satin-finished lapels, and \
             a breathable lining, it is designed for the gentleman who commands \
             every room."
                .to_string(),
        );
        suit.reviews = Some(128);
        suit.colors = vec![
            "Navy".to_string(),
            "Black".to_string(),
            "Charcoal".to_string(),
        ];
    }

    products
}

fn accessory_products() -> Vec<Product> {
    vec![
        accessory(
            201,
            "The Chrono Black",
            Category::Watches,
            8999,
            12500,
            4.9,
            "https://images.unsplash.com/photo-1524592094714-0f0654e20314?q=80&w=1000&auto=format&fit=crop",
            Some("LUXURY"),
        ),
        accessory(
            202,
            "Oxford Leather Belt",
            Category::Belts,
            2499,
            3500,
            4.7,
            "https://images.unsplash.com/photo-1624222247344-550fb60583dc?q=80&w=1000&auto=format&fit=crop",
            Some("ESSENTIAL"),
        ),
        accessory(
            203,
            "Aviator Sunglasses",
            Category::Eyewear,
            3999,
            5000,
            4.6,
            "https://images.unsplash.com/photo-1511499767150-a48a237f0083?q=80&w=1000&auto=format&fit=crop",
            Some("NEW"),
        ),
        accessory(
            204,
            "Slim Cardholder",
            Category::Wallets,
            1299,
            1800,
            4.5,
            "https://images.unsplash.com/photo-1627123424574-181ce5171c98?q=80&w=1000&auto=format&fit=crop",
            None,
        ),
        accessory(
            205,
            "Silk Pocket Square",
            Category::Ties,
            899,
            1200,
            4.8,
            "https://images.unsplash.com/photo-1596522354195-e84ae80050d0?q=80&w=1000&auto=format&fit=crop",
            Some("FORMAL"),
        ),
        accessory(
            206,
            "Silver Cufflinks",
            Category::Jewelry,
            1999,
            2500,
            4.7,
            "https://images.unsplash.com/photo-1599643478518-17488fbbcd75?q=80&w=1000&auto=format&fit=crop",
            None,
        ),
        accessory(
            207,
            "Weekender Duffle",
            Category::Bags,
            6499,
            8000,
            4.9,
            "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?q=80&w=1000&auto=format&fit=crop",
            Some("BESTSELLER"),
        ),
        accessory(
            208,
            "Gold Signet Ring",
            Category::Jewelry,
            3499,
            4500,
            4.4,
            "https://images.unsplash.com/photo-1617038220319-88af15286a77?q=80&w=1000&auto=format&fit=crop",
            Some("TRENDING"),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_all_returns_everything() {
        let catalog = Catalog::seeded();
        assert_eq!(
            catalog.filter(CategoryFilter::All).len(),
            catalog.products().len()
        );
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = Catalog::seeded();
        let suits = catalog.filter(CategoryFilter::Only(Category::Suits));
        assert_eq!(suits.len(), 3);
        assert!(suits.iter().all(|p| p.category == Category::Suits));
    }

    #[test]
    fn test_filter_empty_category_is_not_an_error() {
        let catalog = Catalog::seeded();
        // Trousers is on the filter bar but has no products seeded.
        let trousers = catalog.filter(CategoryFilter::Only(Category::Trousers));
        assert!(trousers.is_empty());
    }

    #[test]
    fn test_get_miss_is_none() {
        let catalog = Catalog::seeded();
        assert!(catalog.get(ProductId::new(999)).is_none());
    }

    #[test]
    fn test_collection_and_accessories_partition() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.collection().len(), 8);
        assert_eq!(catalog.accessories().len(), 8);
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::seeded();
        let mut ids: Vec<_> = catalog.products().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.products().len());
    }

    #[test]
    fn test_discount_percent() {
        let catalog = Catalog::seeded();
        let suit = catalog.get(ProductId::new(1)).unwrap();
        // (12999 - 8499) / 12999 ~= 34.6%, rounds to 35
        assert_eq!(suit.discount_percent(), Some(35));
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().ok(), Some(CategoryFilter::All));
        assert_eq!(
            "shirts".parse::<CategoryFilter>().ok(),
            Some(CategoryFilter::Only(Category::Shirts))
        );
        assert!("sneakers".parse::<CategoryFilter>().is_err());
    }
}
