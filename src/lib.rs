//! Cache Headers - incremental `Cache-Control` and `Expires` builder
//!
//! Handlers call [`CacheHeaders::cache_control`] and [`CacheHeaders::expires`]
//! any number of times while building a response; the accumulated
//! directives are rendered into headers once, when the response is returned.

pub mod api;
pub mod config;
pub mod directive;
pub mod error;
pub mod models;
pub mod response;

pub use api::AppState;
pub use config::Config;
pub use directive::{Directive, DirectiveSet, Expiry, Input, Value};
pub use error::HeaderError;
pub use response::CacheHeaders;
