use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::FeaturedListings;

#[async_trait]
pub trait GetFeaturedListingsUseCase: Send + Sync {
    async fn execute(&self) -> Result<FeaturedListings, CatalogError>;
}
