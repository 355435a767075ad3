#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.not_found")]
    NotFound,
    #[error("catalog.service_unavailable")]
    ServiceUnavailable,
    #[error("catalog.invalid_response")]
    InvalidResponse,
}
