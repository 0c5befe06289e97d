//! Request and Response models for the demo API
//!
//! Query adapters that produce typed directive input, and the DTOs
//! serialized into HTTP response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{parse_expiry, DirectiveQuery};
pub use responses::{CacheHeadersResponse, ErrorResponse, HealthResponse};
