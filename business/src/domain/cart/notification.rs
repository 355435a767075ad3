use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::ListingId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Informational,
    Success,
    Destructive,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Informational => write!(f, "informational"),
            Severity::Success => write!(f, "success"),
            Severity::Destructive => write!(f, "destructive"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// Explicit removal by the user.
    Removed,
    /// Quantity was set to zero or below.
    ZeroQuantity,
}

/// State change worth telling the user about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    ItemAdded {
        id: ListingId,
        title: String,
        quantity: u32,
    },
    QuantityIncreased {
        id: ListingId,
        title: String,
        added: u32,
        total: u32,
    },
    ItemRemoved {
        id: ListingId,
        title: String,
        reason: RemovalReason,
    },
    Cleared {
        items_removed: usize,
    },
}

impl CartEvent {
    pub fn severity(&self) -> Severity {
        match self {
            CartEvent::ItemAdded { .. } => Severity::Success,
            CartEvent::QuantityIncreased { .. } => Severity::Informational,
            CartEvent::ItemRemoved { .. } => Severity::Destructive,
            CartEvent::Cleared { .. } => Severity::Informational,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded { .. } => "Item added",
            CartEvent::QuantityIncreased { .. } => "Quantity updated",
            CartEvent::ItemRemoved { .. } => "Item removed",
            CartEvent::Cleared { .. } => "Cart cleared",
        }
    }

    fn description(&self) -> String {
        match self {
            CartEvent::ItemAdded {
                title, quantity, ..
            } => format!("\"{}\" x{} added to your cart.", title, quantity),
            CartEvent::QuantityIncreased {
                title,
                added,
                total,
                ..
            } => format!("+{} \"{}\" (total: {})", added, title, total),
            CartEvent::ItemRemoved {
                title,
                reason: RemovalReason::Removed,
                ..
            } => format!("\"{}\" was removed from your cart.", title),
            CartEvent::ItemRemoved {
                title,
                reason: RemovalReason::ZeroQuantity,
                ..
            } => format!("\"{}\" was removed (quantity 0).", title),
            CartEvent::Cleared { .. } => "All items have been removed.".to_string(),
        }
    }
}

/// User-facing message describing a cart change, ready for a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct CartNotification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub event: CartEvent,
    pub created_at: DateTime<Utc>,
}

impl From<CartEvent> for CartNotification {
    fn from(event: CartEvent) -> Self {
        Self {
            title: event.title().to_string(),
            description: event.description(),
            severity: event.severity(),
            event,
            created_at: Utc::now(),
        }
    }
}

/// Outbound port receiving cart notifications.
///
/// Delivery is fire-and-forget: implementations swallow their own failures,
/// and the cart has already committed the change when `notify` is called.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: CartNotification);
}
