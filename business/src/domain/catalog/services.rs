use async_trait::async_trait;

use crate::domain::shared::value_objects::ListingId;

use super::errors::CatalogError;
use super::model::Listing;

/// Shortest query worth sending to the catalog search.
pub const MIN_SEARCH_QUERY_LEN: usize = 2;
/// Number of search results returned when the caller does not ask for a limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;
/// Upper bound for the search limit a caller may request.
pub const MAX_SEARCH_LIMIT: usize = 20;

/// Service port for the hosted game catalog.
///
/// The catalog is read-only from this side: listings are created and indexed
/// by the hosted service.
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Listing>, CatalogError>;

    async fn get_by_id(&self, id: ListingId) -> Result<Listing, CatalogError>;

    /// Case-insensitive match on title or description, at most `limit` results.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<Listing>, CatalogError>;
}
