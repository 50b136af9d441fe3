//! Mock shipping addresses.
//!
//! The checkout panel and profile page pick from a static address list; the
//! core logic never mutates it. One address is the default selection.

use serde::{Deserialize, Serialize};

use aura_core::AddressId;

/// Label shown on the address card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AddressLabel {
    Home,
    Work,
}

impl std::fmt::Display for AddressLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Home => f.write_str("Home"),
            Self::Work => f.write_str("Work"),
        }
    }
}

/// One saved shipping address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub label: AddressLabel,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub is_default: bool,
}

impl Address {
    /// Single-line rendering for the checkout panel ("street, city").
    #[must_use]
    pub fn short_form(&self) -> String {
        format!("{}, {}", self.street, self.city)
    }
}

/// The read-only mock address list.
#[derive(Debug, Clone)]
pub struct AddressBook {
    addresses: Vec<Address>,
}

impl AddressBook {
    /// The seeded mock addresses.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            addresses: vec![
                Address {
                    id: AddressId::new(1),
                    label: AddressLabel::Home,
                    street: "108, Cyber City, DLF Phase 2".to_string(),
                    city: "Gurugram".to_string(),
                    state: "Haryana".to_string(),
                    zip: "122002".to_string(),
                    phone: "+91 98765 43210".to_string(),
                    is_default: true,
                },
                Address {
                    id: AddressId::new(2),
                    label: AddressLabel::Work,
                    street: "WeWork, 12th Main Rd, Indiranagar".to_string(),
                    city: "Bangalore".to_string(),
                    state: "Karnataka".to_string(),
                    zip: "560008".to_string(),
                    phone: "+91 98765 43210".to_string(),
                    is_default: false,
                },
            ],
        }
    }

    /// All addresses in display order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.addresses.iter()
    }

    /// Look up an address by id.
    #[must_use]
    pub fn get(&self, id: AddressId) -> Option<&Address> {
        self.addresses.iter().find(|a| a.id == id)
    }

    /// The default shipping selection (first address if none is flagged).
    #[must_use]
    pub fn default_address(&self) -> Option<&Address> {
        self.addresses
            .iter()
            .find(|a| a.is_default)
            .or_else(|| self.addresses.first())
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::sample()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
