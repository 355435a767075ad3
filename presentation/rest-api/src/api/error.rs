use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Prices travel as JSON numbers.
pub fn to_amount(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
