//! Directive Module
//!
//! Builds `Cache-Control` values from incremental, typed caller input.
//!
//! # Components
//! - [`Directive`]: the closed catalogue of settable directives
//! - [`DirectiveSet`]: insertion-ordered directives for one response
//! - [`coerce`]: applies caller input, silently dropping unsettable entries
//! - [`render`]: serializes a set into a header value
//! - [`expires`]: resolves an expiry and contributes `max-age`

pub mod coerce;
pub mod expires;
mod name;
pub mod render;
mod set;
mod value;


// Re-export public types
pub use coerce::apply;
pub use expires::{http_date, Expiration, Expiry};
pub use name::{Directive, DirectiveKind};
pub use render::render;
pub use set::DirectiveSet;
pub use value::{DirectiveValue, Input, Value};
