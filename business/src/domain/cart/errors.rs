#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.listing_unavailable")]
    ListingUnavailable,
    #[error(transparent)]
    Catalog(#[from] crate::domain::catalog::errors::CatalogError),
}
