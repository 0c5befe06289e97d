//! Response Module
//!
//! Per-request response context that owns the accumulated cache directives
//! and writes them out when the response is built.

mod cache_headers;

pub use cache_headers::CacheHeaders;
