//! Header Rendering Module
//!
//! Serializes a [`DirectiveSet`] into a `Cache-Control` header value.

use std::fmt;

use axum::http::HeaderValue;

use crate::directive::{DirectiveSet, DirectiveValue};
use crate::error::Result;

/// Separator between rendered directives.
pub const SEPARATOR: &str = ", ";

// == Render ==
/// Renders the set in insertion order, e.g. `public, max-age=60`.
///
/// An empty set renders as an empty string.
pub fn render(set: &DirectiveSet) -> String {
    set.to_string()
}

/// Renders the set as an [`HeaderValue`].
pub fn to_header_value(set: &DirectiveSet) -> Result<HeaderValue> {
    Ok(HeaderValue::from_str(&render(set))?)
}

impl fmt::Display for DirectiveSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (directive, value)) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(SEPARATOR)?;
            }
            match value {
                DirectiveValue::Present => write!(f, "{}", directive)?,
                DirectiveValue::Seconds(seconds) => write!(f, "{}={}", directive, seconds)?,
            }
        }
        Ok(())
    }
}
