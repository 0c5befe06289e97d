//! Response DTOs for the demo API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::response::CacheHeaders;

/// Echo of the headers produced by `/cache-control` and `/expires`
#[derive(Debug, Clone, Serialize)]
pub struct CacheHeadersResponse {
    /// Rendered `Cache-Control` value, empty when no directive is set
    pub cache_control: String,
    /// Rendered `Expires` value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
}

impl CacheHeadersResponse {
    /// Creates a new CacheHeadersResponse from the response context
    pub fn from_headers(headers: &CacheHeaders) -> Self {
        Self {
            cache_control: headers.cache_control_value(),
            expires: headers.expires_value(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
