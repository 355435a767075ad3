use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Listing;
use crate::domain::shared::value_objects::ListingId;

pub struct GetListingByIdParams {
    pub id: ListingId,
}

#[async_trait]
pub trait GetListingByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetListingByIdParams) -> Result<Listing, CatalogError>;
}
