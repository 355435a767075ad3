use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{CartCandidate, CartSnapshot};
use crate::domain::cart::service::CartService;
use crate::domain::cart::use_cases::add_listing::{
    AddListingToCartParams, AddListingToCartUseCase,
};
use crate::domain::catalog::services::CatalogService;
use crate::domain::logger::Logger;

pub struct AddListingToCartUseCaseImpl {
    pub catalog: Arc<dyn CatalogService>,
    pub cart: Arc<dyn CartService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddListingToCartUseCase for AddListingToCartUseCaseImpl {
    async fn execute(&self, params: AddListingToCartParams) -> Result<CartSnapshot, CartError> {
        self.logger
            .info(&format!("Adding listing {} to cart", params.listing_id));

        let listing = self.catalog.get_by_id(params.listing_id).await?;

        // Upcoming games are shown in the catalog but cannot be bought yet.
        if !listing.available {
            self.logger.warn(&format!(
                "Listing {} is not available yet, not adding to cart",
                listing.id
            ));
            return Err(CartError::ListingUnavailable);
        }

        Ok(self
            .cart
            .add_item(CartCandidate::from(listing), params.quantity)
            .await)
    }
}
