use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CatalogError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "catalog.not_found"),
            CatalogError::ServiceUnavailable => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "catalog.service_unavailable",
            ),
            CatalogError::InvalidResponse => (
                StatusCode::BAD_GATEWAY,
                "UpstreamError",
                "catalog.invalid_response",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_upstream_failures_to_bad_gateway() {
        let (status, json) = CatalogError::ServiceUnavailable.into_error_response();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(json.0.name, "UpstreamError");

        let (status, _) = CatalogError::InvalidResponse.into_error_response();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
