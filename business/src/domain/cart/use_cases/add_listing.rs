use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSnapshot;
use crate::domain::shared::value_objects::ListingId;

pub struct AddListingToCartParams {
    pub listing_id: ListingId,
    pub quantity: Option<i64>,
}

#[async_trait]
pub trait AddListingToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddListingToCartParams) -> Result<CartSnapshot, CartError>;
}
