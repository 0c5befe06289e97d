//! API Module
//!
//! HTTP handlers and routing for the demo service.
//!
//! # Endpoints
//! - `GET /cache-control` - Build `Cache-Control` from query directives
//! - `GET /expires` - Expire after the configured default
//! - `GET /expires/:amount` - Expire after seconds or at an RFC 3339 time
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
