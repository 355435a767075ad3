//! Durable cart record format and the single normalization step applied to
//! every line item entering the cart, whether it comes from storage or from
//! the catalog.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::{ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::ListingId;

use super::model::{CartCandidate, CartItem, DEFAULT_QUANTITY};

/// Un-normalized line item, as received at an ingestion boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCartItem {
    pub id: ListingId,
    pub title: String,
    pub description: Option<String>,
    pub unit_price: Option<BigDecimal>,
    pub image_url: Option<String>,
    pub quantity: Option<i64>,
}

impl RawCartItem {
    pub fn from_candidate(candidate: CartCandidate, quantity: Option<i64>) -> Self {
        Self {
            id: candidate.id,
            title: candidate.title,
            description: candidate.description,
            unit_price: Some(candidate.unit_price),
            image_url: candidate.image_url,
            quantity,
        }
    }
}

/// Turns a raw line item into a cart item.
///
/// Missing, zero or negative quantities become [`DEFAULT_QUANTITY`], missing or
/// negative prices become zero and blank optional strings become `None`.
pub fn normalize(raw: RawCartItem) -> CartItem {
    let quantity = match raw.quantity {
        Some(quantity) if quantity > 0 => u32::try_from(quantity).unwrap_or(u32::MAX),
        _ => DEFAULT_QUANTITY,
    };
    let unit_price = raw
        .unit_price
        .filter(|price| *price >= BigDecimal::zero())
        .unwrap_or_else(BigDecimal::zero);

    CartItem {
        id: raw.id,
        title: raw.title,
        description: non_blank(raw.description),
        unit_price,
        image_url: non_blank(raw.image_url),
        quantity,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Line item as read from the durable record. Accepts both the storefront's
/// field names and their English spellings.
#[derive(Debug, Deserialize)]
struct StoredCartItemIn {
    id: i64,
    #[serde(default, alias = "titulo")]
    title: String,
    #[serde(default, alias = "descripcion")]
    description: Option<String>,
    #[serde(default, alias = "precio", alias = "unitPrice")]
    unit_price: Option<f64>,
    #[serde(default, alias = "imageUrl")]
    image_url: Option<String>,
    #[serde(default)]
    quantity: Option<serde_json::Value>,
}

impl From<StoredCartItemIn> for RawCartItem {
    fn from(stored: StoredCartItemIn) -> Self {
        Self {
            id: ListingId::new(stored.id),
            title: stored.title,
            description: stored.description,
            unit_price: stored
                .unit_price
                .and_then(|price| BigDecimal::from_str(&price.to_string()).ok()),
            image_url: stored.image_url,
            quantity: stored.quantity.as_ref().and_then(whole_number),
        }
    }
}

fn whole_number(value: &serde_json::Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

/// Line item as written to the durable record.
#[derive(Debug, Serialize)]
struct StoredCartItemOut<'a> {
    id: i64,
    #[serde(rename = "titulo")]
    title: &'a str,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(rename = "precio")]
    unit_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_url: Option<&'a str>,
    quantity: u32,
}

impl<'a> From<&'a CartItem> for StoredCartItemOut<'a> {
    fn from(item: &'a CartItem) -> Self {
        Self {
            id: item.id.value(),
            title: &item.title,
            description: item.description.as_deref(),
            unit_price: item.unit_price.to_f64().unwrap_or(0.0),
            image_url: item.image_url.as_deref(),
            quantity: item.quantity,
        }
    }
}

/// Parses a durable record into normalized cart items.
///
/// Entries sharing an id are merged into the first one, adding quantities.
pub fn decode_cart(raw: &str) -> Result<Vec<CartItem>, serde_json::Error> {
    let stored: Vec<StoredCartItemIn> = serde_json::from_str(raw)?;

    let mut items: Vec<CartItem> = Vec::with_capacity(stored.len());
    for item in stored.into_iter().map(|s| normalize(s.into())) {
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => items.push(item),
        }
    }
    Ok(items)
}

pub fn encode_cart(items: &[CartItem]) -> Result<String, serde_json::Error> {
    let stored: Vec<StoredCartItemOut<'_>> = items.iter().map(StoredCartItemOut::from).collect();
    serde_json::to_string(&stored)
}
