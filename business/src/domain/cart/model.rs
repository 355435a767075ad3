use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use num_traits::Zero;

use crate::domain::catalog::model::Listing;
use crate::domain::shared::value_objects::ListingId;

/// Quantity used when a caller adds an item without a valid quantity.
pub const DEFAULT_QUANTITY: u32 = 1;

/// One listing in the cart together with the requested quantity.
///
/// `quantity` is at least 1 for every item held by the cart; an item whose
/// quantity would drop to zero is removed instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: ListingId,
    pub title: String,
    pub description: Option<String>,
    pub unit_price: BigDecimal,
    pub image_url: Option<String>,
    pub quantity: u32,
}

impl CartItem {
    /// `unit_price * quantity`.
    pub fn subtotal(&self) -> BigDecimal {
        &self.unit_price * BigDecimal::from(self.quantity)
    }
}

/// Listing data supplied when adding to the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartCandidate {
    pub id: ListingId,
    pub title: String,
    pub description: Option<String>,
    pub unit_price: BigDecimal,
    pub image_url: Option<String>,
}

impl From<Listing> for CartCandidate {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            description: listing.description,
            unit_price: listing.price,
            image_url: listing.image_url,
        }
    }
}

/// Read-only view of the cart handed to consumers after each mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub items: Vec<CartItem>,
    pub item_count: u64,
    pub total_price: BigDecimal,
    pub updated_at: Option<DateTime<Utc>>,
}

impl CartSnapshot {
    pub fn new(items: Vec<CartItem>, updated_at: Option<DateTime<Utc>>) -> Self {
        let item_count = item_count(&items);
        let total_price = total_price(&items);
        Self {
            items,
            item_count,
            total_price,
            updated_at,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), None)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Sum of all quantities.
pub fn item_count(items: &[CartItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

/// Sum of `unit_price * quantity` across items.
pub fn total_price(items: &[CartItem]) -> BigDecimal {
    items
        .iter()
        .fold(BigDecimal::zero(), |total, item| total + item.subtotal())
}
