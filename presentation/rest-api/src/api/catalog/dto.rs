use poem_openapi::Object;

use business::domain::catalog::model::{FeaturedListings, Listing};

use crate::api::error::to_amount;

#[derive(Debug, Clone, Object)]
pub struct ListingResponse {
    pub id: i64,
    pub title: String,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    pub price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub image_url: Option<String>,
    /// false for upcoming games, which cannot be added to the cart
    pub available: bool,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            id: listing.id.value(),
            price: to_amount(&listing.price),
            title: listing.title,
            description: listing.description,
            image_url: listing.image_url,
            available: listing.available,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct FeaturedListingsResponse {
    pub available: Vec<ListingResponse>,
    pub upcoming: Vec<ListingResponse>,
}

impl From<FeaturedListings> for FeaturedListingsResponse {
    fn from(featured: FeaturedListings) -> Self {
        Self {
            available: featured.available.into_iter().map(Into::into).collect(),
            upcoming: featured.upcoming.into_iter().map(Into::into).collect(),
        }
    }
}
