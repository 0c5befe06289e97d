//! Cache Headers Context
//!
//! Holds the `Cache-Control` directives and `Expires` timestamp for one
//! response. Handlers mutate it as often as they like; the headers are
//! written once, when the response is assembled.

use axum::http::header::{HeaderMap, HeaderValue, CACHE_CONTROL, EXPIRES};
use axum::response::{IntoResponseParts, ResponseParts};
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::directive::{self, coerce, http_date, DirectiveSet, Expiration, Expiry, Input};
use crate::error::{HeaderError, Result};

// == Cache Headers ==
/// Cache header state for a single response.
///
/// Create one per request; it is never shared between responses.
///
/// ```
/// use cache_headers::{directives, CacheHeaders};
///
/// let mut headers = CacheHeaders::new();
/// headers.cache_control(directives![public, max_age = 60, s_maxage = 30]);
/// headers.cache_control(directives![private]);
/// assert_eq!(headers.cache_control_value(), "public, max-age=60, s-maxage=30, private");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CacheHeaders {
    /// Created on first mutation
    directives: Option<DirectiveSet>,
    /// Set by [`CacheHeaders::expires`]
    expires: Option<DateTime<Utc>>,
}

impl CacheHeaders {
    // == Constructor ==
    pub fn new() -> Self {
        Self::default()
    }

    // == Cache Control ==
    /// Merges `inputs` into the accumulated directives.
    pub fn cache_control<'a, I>(&mut self, inputs: I) -> &mut Self
    where
        I: IntoIterator<Item = Input<'a>>,
    {
        self.cache_control_at(inputs, Utc::now())
    }

    /// Same as [`CacheHeaders::cache_control`] with an explicit evaluation instant.
    pub fn cache_control_at<'a, I>(&mut self, inputs: I, now: DateTime<Utc>) -> &mut Self
    where
        I: IntoIterator<Item = Input<'a>>,
    {
        coerce::apply(self.directives_mut(), inputs, now);
        self
    }

    // == Expires ==
    /// Sets `Expires` from `amount` and merges `max-age` plus `inputs`.
    pub fn expires<'a, I>(&mut self, amount: impl Into<Expiry>, inputs: I) -> Expiration
    where
        I: IntoIterator<Item = Input<'a>>,
    {
        self.expires_at(amount, inputs, Utc::now())
    }

    /// Same as [`CacheHeaders::expires`] with an explicit evaluation instant.
    pub fn expires_at<'a, I>(
        &mut self,
        amount: impl Into<Expiry>,
        inputs: I,
        now: DateTime<Utc>,
    ) -> Expiration
    where
        I: IntoIterator<Item = Input<'a>>,
    {
        let set = self.directives_mut();
        let expiration = directive::expires::expires(set, amount.into(), inputs, now);
        self.expires = Some(expiration.at);
        expiration
    }

    // == Accessors ==
    pub fn directives(&self) -> Option<&DirectiveSet> {
        self.directives.as_ref()
    }

    fn directives_mut(&mut self) -> &mut DirectiveSet {
        self.directives.get_or_insert_with(DirectiveSet::new)
    }

    /// Rendered `Cache-Control` value, empty when nothing is set.
    pub fn cache_control_value(&self) -> String {
        self.directives
            .as_ref()
            .map(directive::render)
            .unwrap_or_default()
    }

    /// Rendered `Expires` value, if [`CacheHeaders::expires`] was called.
    pub fn expires_value(&self) -> Option<String> {
        self.expires.map(http_date)
    }

    pub fn expires_time(&self) -> Option<DateTime<Utc>> {
        self.expires
    }

    pub fn is_empty(&self) -> bool {
        self.expires.is_none()
            && self
                .directives
                .as_ref()
                .map_or(true, DirectiveSet::is_empty)
    }

    // == Reset ==
    /// Clears all state so the context can serve another response.
    pub fn reset(&mut self) {
        self.directives = None;
        self.expires = None;
    }

    // == Apply ==
    /// Writes `Cache-Control` (when non-empty) and `Expires` (when set).
    pub fn apply_to(&self, headers: &mut HeaderMap) -> Result<()> {
        if let Some(set) = self.directives.as_ref().filter(|set| !set.is_empty()) {
            let value = directive::render::to_header_value(set)?;
            debug!(cache_control = ?value, "Writing Cache-Control header");
            headers.insert(CACHE_CONTROL, value);
        }

        if let Some(expires) = self.expires_value() {
            debug!(expires = %expires, "Writing Expires header");
            headers.insert(EXPIRES, HeaderValue::from_str(&expires)?);
        }

        Ok(())
    }
}

// == Axum Integration ==
impl IntoResponseParts for CacheHeaders {
    type Error = HeaderError;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts> {
        self.apply_to(res.headers_mut())?;
        Ok(res)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::directive::Directive;
    use crate::directives;
    use chrono::{TimeDelta, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn tokens(headers: &CacheHeaders) -> Vec<String> {
        headers
            .cache_control_value()
            .split(", ")
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_new_is_empty() {
        let headers = CacheHeaders::new();
        assert!(headers.is_empty());
        assert!(headers.directives().is_none());
        assert_eq!(headers.cache_control_value(), "");
        assert!(headers.expires_value().is_none());
    }

    #[test]
    fn test_sets_headers() {
        let mut headers = CacheHeaders::new();
        headers.cache_control(directives![public, max_age = 60.0]);
        let tokens = tokens(&headers);
        assert!(tokens.contains(&"public".to_string()));
        assert!(tokens.contains(&"max-age=60".to_string()));
    }

    #[test]
    fn test_merges_previous_calls() {
        let mut headers = CacheHeaders::new();
        headers
            .cache_control(directives![public, max_age = 60, s_maxage = 30])
            .cache_control(directives![private]);
        assert_eq!(
            headers.cache_control_value(),
            "public, max-age=60, s-maxage=30, private"
        );
    }

    #[test]
    fn test_false_removes_previous() {
        let mut headers = CacheHeaders::new();
        headers.cache_control(directives![public, no_cache = true]);
        headers.cache_control(directives![private, no_cache = false]);
        let tokens = tokens(&headers);
        assert!(!tokens.contains(&"no-cache".to_string()));
        assert!(tokens.contains(&"private".to_string()));
    }

    #[test]
    fn test_ignores_unsettable_directives() {
        let mut headers = CacheHeaders::new();
        headers.cache_control(directives![public = 60, max_age = 60]);
        assert_eq!(headers.cache_control_value(), "max-age=60");
    }

    #[test]
    fn test_time_values_become_seconds() {
        let mut headers = CacheHeaders::new();
        let expiry = fixed_now() + TimeDelta::seconds(60);
        headers.cache_control_at(directives![public, max_age = expiry], fixed_now());
        assert_eq!(headers.cache_control_value(), "public, max-age=60");
    }

    #[test]
    fn test_stale_directives() {
        let mut headers = CacheHeaders::new();
        headers.cache_control(directives![public, stale_while_revalidate = 120]);
        headers.cache_control(directives![stale_while_error = 120]);
        assert_eq!(
            headers.cache_control_value(),
            "public, stale-while-revalidate=120, stale-while-error=120"
        );
    }

    #[test]
    fn test_expires_relative() {
        let mut headers = CacheHeaders::new();
        headers.expires_at(60, directives![public, no_cache], fixed_now());
        let tokens = tokens(&headers);
        for expected in ["max-age=60", "public", "no-cache"] {
            assert!(tokens.contains(&expected.to_string()), "missing {}", expected);
        }
        assert_eq!(
            headers.expires_value().as_deref(),
            Some("Fri, 01 Mar 2024 12:01:00 GMT")
        );
    }

    #[test]
    fn test_expires_absolute() {
        let mut headers = CacheHeaders::new();
        let at = fixed_now() + TimeDelta::seconds(60);
        let expiration = headers.expires_at(at, directives![public, no_cache], fixed_now());
        assert_eq!(expiration.at, at);
        assert_eq!(headers.expires_time(), Some(at));
        assert_eq!(
            headers.directives().and_then(|set| set.seconds(Directive::MaxAge)),
            Some(60)
        );
    }

    #[test]
    fn test_apply_to_writes_headers() {
        let mut headers = CacheHeaders::new();
        headers.expires_at(60, directives![public], fixed_now());

        let mut map = HeaderMap::new();
        headers.apply_to(&mut map).unwrap();
        assert_eq!(map.get(CACHE_CONTROL).unwrap(), "public, max-age=60");
        assert_eq!(map.get(EXPIRES).unwrap(), "Fri, 01 Mar 2024 12:01:00 GMT");
    }

    #[test]
    fn test_apply_to_skips_empty() {
        let mut headers = CacheHeaders::new();
        headers.cache_control(directives![public]);
        headers.cache_control(directives![public = false]);

        let mut map = HeaderMap::new();
        headers.apply_to(&mut map).unwrap();
        assert!(map.get(CACHE_CONTROL).is_none());
        assert!(map.get(EXPIRES).is_none());
    }

    #[test]
    fn test_reset() {
        let mut headers = CacheHeaders::new();
        headers.expires(30, directives![public]);
        assert!(!headers.is_empty());
        headers.reset();
        assert!(headers.is_empty());
        assert_eq!(headers.cache_control_value(), "");
    }
}
