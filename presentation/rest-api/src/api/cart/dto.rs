use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::cart::model::{CartItem, CartSnapshot};
use business::domain::cart::notification::{CartEvent, CartNotification, Severity};

use crate::api::error::to_amount;

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Catalog id of the game to add
    pub game_id: i64,
    /// Units to add; missing or below 1 adds a single unit
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateQuantityRequest {
    /// New absolute quantity; 0 or less removes the line
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub id: i64,
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub unit_price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    pub quantity: u32,
    /// unit_price * quantity
    pub subtotal: f64,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.value(),
            subtotal: to_amount(&item.subtotal()),
            unit_price: to_amount(&item.unit_price),
            title: item.title,
            description: item.description,
            image_url: item.image_url,
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub items: Vec<CartItemResponse>,
    /// Sum of all quantities
    pub item_count: u64,
    pub total_price: f64,
    /// Last mutation; absent until the cart changes
    #[oai(skip_serializing_if_is_none)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<CartSnapshot> for CartResponse {
    fn from(snapshot: CartSnapshot) -> Self {
        Self {
            total_price: to_amount(&snapshot.total_price),
            item_count: snapshot.item_count,
            items: snapshot.items.into_iter().map(Into::into).collect(),
            updated_at: snapshot.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum SeverityDto {
    #[oai(rename = "informational")]
    Informational,
    #[oai(rename = "success")]
    Success,
    #[oai(rename = "destructive")]
    Destructive,
}

impl From<Severity> for SeverityDto {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Informational => SeverityDto::Informational,
            Severity::Success => SeverityDto::Success,
            Severity::Destructive => SeverityDto::Destructive,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum NotificationKindDto {
    #[oai(rename = "item_added")]
    ItemAdded,
    #[oai(rename = "quantity_increased")]
    QuantityIncreased,
    #[oai(rename = "item_removed")]
    ItemRemoved,
    #[oai(rename = "cleared")]
    Cleared,
}

#[derive(Debug, Clone, Object)]
pub struct NotificationResponse {
    pub title: String,
    pub description: String,
    pub severity: SeverityDto,
    pub kind: NotificationKindDto,
    /// Game the notification is about; absent when the whole cart was cleared
    #[oai(skip_serializing_if_is_none)]
    pub game_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<CartNotification> for NotificationResponse {
    fn from(notification: CartNotification) -> Self {
        let (kind, game_id) = match &notification.event {
            CartEvent::ItemAdded { id, .. } => (NotificationKindDto::ItemAdded, Some(id.value())),
            CartEvent::QuantityIncreased { id, .. } => {
                (NotificationKindDto::QuantityIncreased, Some(id.value()))
            }
            CartEvent::ItemRemoved { id, .. } => {
                (NotificationKindDto::ItemRemoved, Some(id.value()))
            }
            CartEvent::Cleared { .. } => (NotificationKindDto::Cleared, None),
        };

        Self {
            title: notification.title,
            description: notification.description,
            severity: notification.severity.into(),
            kind,
            game_id,
            created_at: notification.created_at,
        }
    }
}
