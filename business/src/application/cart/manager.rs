use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, watch};

use crate::domain::cart::model::{self, CartCandidate, CartItem, CartSnapshot};
use crate::domain::cart::notification::{
    CartEvent, CartNotification, NotificationSink, RemovalReason,
};
use crate::domain::cart::record::{RawCartItem, decode_cart, encode_cart, normalize};
use crate::domain::cart::repository::{CART_STORAGE_KEY, CartStore};
use crate::domain::cart::service::CartService;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ListingId;

#[derive(Debug, Default)]
struct CartState {
    items: Vec<CartItem>,
    updated_at: Option<DateTime<Utc>>,
}

/// Owns the cart line items and keeps them in sync with the durable store.
///
/// Every mutation runs under the state lock: the change is applied, the whole
/// cart is written back to the store, the new snapshot is published to
/// subscribers and only then the notification is handed to the sink.
/// Clearing an already-empty cart is a no-op.
pub struct CartManager {
    state: Mutex<CartState>,
    store: Arc<dyn CartStore>,
    notifier: Arc<dyn NotificationSink>,
    logger: Arc<dyn Logger>,
    snapshots: watch::Sender<CartSnapshot>,
}

impl CartManager {
    /// Restores the cart from the store.
    ///
    /// A missing record yields an empty cart. A malformed record is removed
    /// from the store and also yields an empty cart.
    pub async fn load(
        store: Arc<dyn CartStore>,
        notifier: Arc<dyn NotificationSink>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        let items = Self::restore(store.as_ref(), logger.as_ref()).await;
        logger.info(&format!("Cart restored with {} items", items.len()));

        let (snapshots, _) = watch::channel(CartSnapshot::new(items.clone(), None));
        Self {
            state: Mutex::new(CartState {
                items,
                updated_at: None,
            }),
            store,
            notifier,
            logger,
            snapshots,
        }
    }

    async fn restore(store: &dyn CartStore, logger: &dyn Logger) -> Vec<CartItem> {
        let raw = match store.load(CART_STORAGE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                logger.error(&format!("Failed to read stored cart: {}", err));
                return Vec::new();
            }
        };

        match decode_cart(&raw) {
            Ok(items) => items,
            Err(err) => {
                logger.warn(&format!("Discarding malformed cart record: {}", err));
                if let Err(err) = store.remove(CART_STORAGE_KEY).await {
                    logger.error(&format!("Failed to discard cart record: {}", err));
                }
                Vec::new()
            }
        }
    }

    /// Persists, publishes and notifies. Called with the state lock held.
    async fn commit(&self, state: &mut CartState, event: Option<CartEvent>) -> CartSnapshot {
        state.updated_at = Some(Utc::now());
        self.persist(&state.items).await;

        let snapshot = CartSnapshot::new(state.items.clone(), state.updated_at);
        self.snapshots.send_replace(snapshot.clone());

        if let Some(event) = event {
            self.notifier.notify(CartNotification::from(event));
        }
        snapshot
    }

    async fn persist(&self, items: &[CartItem]) {
        // An empty cart is stored as no record at all.
        let result = if items.is_empty() {
            self.store.remove(CART_STORAGE_KEY).await
        } else {
            match encode_cart(items) {
                Ok(json) => self.store.save(CART_STORAGE_KEY, &json).await,
                Err(err) => {
                    self.logger
                        .error(&format!("Failed to serialize cart: {}", err));
                    return;
                }
            }
        };

        if let Err(err) = result {
            self.logger.error(&format!("Failed to persist cart: {}", err));
        }
    }

    fn take_item(state: &mut CartState, id: ListingId) -> Option<CartItem> {
        let index = state.items.iter().position(|item| item.id == id)?;
        Some(state.items.remove(index))
    }
}

#[async_trait]
impl CartService for CartManager {
    async fn add_item(&self, candidate: CartCandidate, quantity: Option<i64>) -> CartSnapshot {
        let incoming = normalize(RawCartItem::from_candidate(candidate, quantity));
        let mut state = self.state.lock().await;

        let event = match state.items.iter_mut().find(|item| item.id == incoming.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(incoming.quantity);
                CartEvent::QuantityIncreased {
                    id: existing.id,
                    title: existing.title.clone(),
                    added: incoming.quantity,
                    total: existing.quantity,
                }
            }
            None => {
                let event = CartEvent::ItemAdded {
                    id: incoming.id,
                    title: incoming.title.clone(),
                    quantity: incoming.quantity,
                };
                state.items.push(incoming);
                event
            }
        };

        self.logger.info(&format!("Cart add: {:?}", event));
        self.commit(&mut state, Some(event)).await
    }

    async fn remove_item(&self, id: ListingId) -> CartSnapshot {
        let mut state = self.state.lock().await;

        let Some(removed) = Self::take_item(&mut state, id) else {
            self.logger
                .debug(&format!("Cart remove ignored, item {} not in cart", id));
            return CartSnapshot::new(state.items.clone(), state.updated_at);
        };

        self.logger.info(&format!("Cart remove: item {}", id));
        let event = CartEvent::ItemRemoved {
            id,
            title: removed.title,
            reason: RemovalReason::Removed,
        };
        self.commit(&mut state, Some(event)).await
    }

    async fn update_quantity(&self, id: ListingId, quantity: i64) -> CartSnapshot {
        let mut state = self.state.lock().await;

        if !state.items.iter().any(|item| item.id == id) {
            self.logger
                .debug(&format!("Cart update ignored, item {} not in cart", id));
            return CartSnapshot::new(state.items.clone(), state.updated_at);
        }

        if quantity <= 0 {
            let event = Self::take_item(&mut state, id).map(|removed| CartEvent::ItemRemoved {
                id,
                title: removed.title,
                reason: RemovalReason::ZeroQuantity,
            });
            self.logger
                .info(&format!("Cart update: item {} removed at quantity {}", id, quantity));
            return self.commit(&mut state, event).await;
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(item) = state.items.iter_mut().find(|item| item.id == id) {
            item.quantity = quantity;
        }
        self.logger
            .info(&format!("Cart update: item {} set to {}", id, quantity));
        self.commit(&mut state, None).await
    }

    async fn clear(&self) -> CartSnapshot {
        let mut state = self.state.lock().await;

        if state.items.is_empty() {
            self.logger.debug("Cart clear ignored, cart already empty");
            return CartSnapshot::new(Vec::new(), state.updated_at);
        }

        let items_removed = state.items.len();
        state.items.clear();
        self.logger
            .info(&format!("Cart cleared, {} items removed", items_removed));
        self.commit(&mut state, Some(CartEvent::Cleared { items_removed }))
            .await
    }

    async fn items(&self) -> Vec<CartItem> {
        self.state.lock().await.items.clone()
    }

    async fn item_count(&self) -> u64 {
        model::item_count(&self.state.lock().await.items)
    }

    async fn total_price(&self) -> BigDecimal {
        model::total_price(&self.state.lock().await.items)
    }

    async fn snapshot(&self) -> CartSnapshot {
        let state = self.state.lock().await;
        CartSnapshot::new(state.items.clone(), state.updated_at)
    }

    fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.snapshots.subscribe()
    }
}
