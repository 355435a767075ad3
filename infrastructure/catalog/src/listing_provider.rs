use std::str::FromStr;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use serde::Deserialize;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::Listing;
use business::domain::catalog::services::CatalogService;
use business::domain::shared::value_objects::ListingId;

use crate::client::CatalogClient;

const GAMES_TABLE: &str = "games";

/// Characters with a meaning inside a PostgREST filter expression.
const RESERVED_FILTER_CHARS: &[char] = &[',', '(', ')', '*', '%', '"', '\\'];

/// Row of the hosted `games` table.
#[derive(Debug, Deserialize)]
struct GameRow {
    id: i64,
    #[serde(rename = "titulo")]
    title: String,
    #[serde(default, rename = "descripcion")]
    description: Option<String>,
    #[serde(default, rename = "precio")]
    price: Option<f64>,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default, rename = "disponible")]
    available: Option<bool>,
}

impl GameRow {
    fn into_domain(self) -> Listing {
        let price = self
            .price
            .and_then(|p| BigDecimal::from_str(&p.to_string()).ok())
            .unwrap_or_default();

        Listing {
            id: ListingId::new(self.id),
            title: self.title,
            description: self.description.filter(|d| !d.trim().is_empty()),
            price,
            image_url: self.image_url.filter(|u| !u.trim().is_empty()),
            // Only an explicit `false` marks an upcoming game
            available: self.available != Some(false),
        }
    }
}

/// Strips characters that would break out of the `ilike` pattern.
fn sanitize_query(query: &str) -> String {
    query
        .chars()
        .filter(|c| !RESERVED_FILTER_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// `or` filter matching the query anywhere in the title or the description.
fn search_filter(query: &str) -> String {
    format!("(titulo.ilike.*{q}*,descripcion.ilike.*{q}*)", q = query)
}

pub struct CatalogServicePostgrest {
    client: CatalogClient,
}

impl CatalogServicePostgrest {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    async fn fetch_games(&self, params: &[(&str, String)]) -> Result<Vec<GameRow>, CatalogError> {
        let response = self
            .client
            .client
            .get(self.client.table_url(GAMES_TABLE))
            .header("apikey", &self.client.api_key)
            .header("Authorization", self.client.auth_header())
            .query(params)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!("catalog request failed: {}", err);
                CatalogError::ServiceUnavailable
            })?;

        if !response.status().is_success() {
            tracing::warn!("catalog responded with status {}", response.status());
            return Err(CatalogError::ServiceUnavailable);
        }

        response.json::<Vec<GameRow>>().await.map_err(|err| {
            tracing::warn!("catalog response could not be parsed: {}", err);
            CatalogError::InvalidResponse
        })
    }
}

#[async_trait]
impl CatalogService for CatalogServicePostgrest {
    async fn get_all(&self) -> Result<Vec<Listing>, CatalogError> {
        let rows = self
            .fetch_games(&[("select", "*".to_string()), ("order", "id.asc".to_string())])
            .await?;

        Ok(rows.into_iter().map(GameRow::into_domain).collect())
    }

    async fn get_by_id(&self, id: ListingId) -> Result<Listing, CatalogError> {
        let rows = self
            .fetch_games(&[("select", "*".to_string()), ("id", format!("eq.{}", id))])
            .await?;

        rows.into_iter()
            .next()
            .map(GameRow::into_domain)
            .ok_or(CatalogError::NotFound)
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Listing>, CatalogError> {
        let query = sanitize_query(query);
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let rows = self
            .fetch_games(&[
                ("select", "*".to_string()),
                ("or", search_filter(&query)),
                ("limit", limit.to_string()),
            ])
            .await?;

        Ok(rows.into_iter().map(GameRow::into_domain).collect())
    }
}
