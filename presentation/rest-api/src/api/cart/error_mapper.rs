use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            CartError::ListingUnavailable => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new(
                    "UnavailableError",
                    "cart.listing_unavailable",
                )),
            ),
            CartError::Catalog(err) => err.into_error_response(),
        }
    }
}
