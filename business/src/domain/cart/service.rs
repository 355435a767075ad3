use async_trait::async_trait;
use bigdecimal::BigDecimal;
use tokio::sync::watch;

use crate::domain::shared::value_objects::ListingId;

use super::model::{CartCandidate, CartItem, CartSnapshot};

/// Contract between the cart and its consumers.
///
/// None of the operations fail: invalid quantities are normalized, unknown ids
/// are ignored and storage problems are logged. Mutations return the snapshot
/// committed by that call.
#[async_trait]
pub trait CartService: Send + Sync {
    /// Adds `quantity` units (1 when absent or not positive), merging into an
    /// existing line with the same id.
    async fn add_item(&self, candidate: CartCandidate, quantity: Option<i64>) -> CartSnapshot;

    async fn remove_item(&self, id: ListingId) -> CartSnapshot;

    /// Sets the absolute quantity; zero or below removes the line.
    async fn update_quantity(&self, id: ListingId, quantity: i64) -> CartSnapshot;

    async fn clear(&self) -> CartSnapshot;

    async fn items(&self) -> Vec<CartItem>;

    async fn item_count(&self) -> u64;

    async fn total_price(&self) -> BigDecimal;

    async fn snapshot(&self) -> CartSnapshot;

    /// Receives a fresh snapshot after every committed mutation.
    fn subscribe(&self) -> watch::Receiver<CartSnapshot>;
}
