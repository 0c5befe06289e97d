//! Error types for the header builder and demo service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::{header::InvalidHeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Header Error Enum ==
/// Unified error type for the crate.
///
/// Coercion never surfaces these: unknown or unsettable directives are
/// dropped. They come from explicit parsing and header construction.
#[derive(Error, Debug)]
pub enum HeaderError {
    /// Caller-supplied value could not be interpreted
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Rendered text is not a legal header value
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
}

// == IntoResponse Implementation ==
impl IntoResponse for HeaderError {
    fn into_response(self) -> Response {
        let status = match &self {
            HeaderError::InvalidValue(_) => StatusCode::BAD_REQUEST,
            HeaderError::InvalidHeaderValue(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the crate.
pub type Result<T> = std::result::Result<T, HeaderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_is_bad_request() {
        let response = HeaderError::InvalidValue("max_age=abc".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_invalid_header_value_is_internal_error() {
        let err = axum::http::HeaderValue::from_str("bad\nvalue").unwrap_err();
        let response = HeaderError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_display() {
        let err = HeaderError::InvalidValue("max_age=soon".to_string());
        assert_eq!(err.to_string(), "Invalid value: max_age=soon");
    }
}
