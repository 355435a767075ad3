use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Listing;

pub struct SearchListingsParams {
    pub query: String,
    pub limit: Option<usize>,
}

#[async_trait]
pub trait SearchListingsUseCase: Send + Sync {
    async fn execute(&self, params: SearchListingsParams) -> Result<Vec<Listing>, CatalogError>;
}
