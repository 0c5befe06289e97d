//! Expiry Module
//!
//! Computes the absolute `Expires` timestamp and contributes the matching
//! `max-age` directive.

use std::time::{Duration, SystemTime};

use chrono::{DateTime, TimeDelta, Utc};

use crate::directive::coerce::{self, seconds_until};
use crate::directive::{Directive, DirectiveSet, Input};

/// IMF-fixdate layout used by the `Expires` header.
pub const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// `0000-01-01T00:00:00Z`, the earliest instant with a four-digit year.
const EARLIEST_HTTP_DATE: i64 = -62_167_219_200;
/// `9999-12-31T23:59:59Z`, the latest instant with a four-digit year.
const LATEST_HTTP_DATE: i64 = 253_402_300_799;

// == Expiry ==
/// How long a response stays fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiry {
    /// Relative to the evaluation instant
    Seconds(i64),
    /// Absolute point in time
    At(DateTime<Utc>),
}

impl From<i64> for Expiry {
    fn from(value: i64) -> Self {
        Expiry::Seconds(value)
    }
}

impl From<i32> for Expiry {
    fn from(value: i32) -> Self {
        Expiry::Seconds(i64::from(value))
    }
}

impl From<u32> for Expiry {
    fn from(value: u32) -> Self {
        Expiry::Seconds(i64::from(value))
    }
}

impl From<u64> for Expiry {
    fn from(value: u64) -> Self {
        Expiry::Seconds(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

/// Fractional seconds truncate toward zero.
impl From<f64> for Expiry {
    fn from(value: f64) -> Self {
        Expiry::Seconds(value.trunc() as i64)
    }
}

impl From<Duration> for Expiry {
    fn from(value: Duration) -> Self {
        Expiry::from(value.as_secs())
    }
}

impl From<DateTime<Utc>> for Expiry {
    fn from(value: DateTime<Utc>) -> Self {
        Expiry::At(value)
    }
}

impl From<SystemTime> for Expiry {
    fn from(value: SystemTime) -> Self {
        Expiry::At(DateTime::<Utc>::from(value))
    }
}

// == Expiration ==
/// Result of resolving an [`Expiry`] against an evaluation instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiration {
    /// Value for the `Expires` header
    pub at: DateTime<Utc>,
    /// Value for the `max-age` directive
    pub max_age: u64,
}

impl Expiration {
    pub fn http_date(&self) -> String {
        http_date(self.at)
    }
}

impl Expiry {
    // == Resolve ==
    /// Absolute timestamp and `max-age` for this expiry as seen from `now`.
    ///
    /// The timestamp is clamped to the years an IMF-fixdate can express.
    pub fn resolve(self, now: DateTime<Utc>) -> Expiration {
        match self {
            Expiry::Seconds(seconds) => Expiration {
                at: add_seconds(now, seconds),
                max_age: seconds.max(0) as u64,
            },
            Expiry::At(at) => Expiration {
                at: clamp_to_http_range(at),
                max_age: seconds_until(at, now),
            },
        }
    }
}

fn add_seconds(now: DateTime<Utc>, seconds: i64) -> DateTime<Utc> {
    let bound = if seconds >= 0 {
        LATEST_HTTP_DATE
    } else {
        EARLIEST_HTTP_DATE
    };
    let at = TimeDelta::try_seconds(seconds)
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or_else(|| from_timestamp(bound, now));
    clamp_to_http_range(at)
}

/// Keeps `at` within `0000-01-01T00:00:00Z ..= 9999-12-31T23:59:59Z`.
fn clamp_to_http_range(at: DateTime<Utc>) -> DateTime<Utc> {
    let seconds = at.timestamp();
    let clamped = seconds.clamp(EARLIEST_HTTP_DATE, LATEST_HTTP_DATE);
    if clamped == seconds {
        at
    } else {
        from_timestamp(clamped, at)
    }
}

fn from_timestamp(seconds: i64, fallback: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(seconds, 0).unwrap_or(fallback)
}

// == Expires ==
/// Applies `inputs` to `set`, then sets `max-age` from `amount`.
///
/// The computed `max-age` is applied last, so it overrides a `max_age`
/// passed in `inputs`. Returns the resolved expiration.
pub fn expires<'a, I>(
    set: &mut DirectiveSet,
    amount: Expiry,
    inputs: I,
    now: DateTime<Utc>,
) -> Expiration
where
    I: IntoIterator<Item = Input<'a>>,
{
    let expiration = amount.resolve(now);
    coerce::apply(set, inputs, now);
    set.set_seconds(Directive::MaxAge, expiration.max_age);
    expiration
}

// == HTTP Date ==
/// Formats a timestamp as an IMF-fixdate, e.g. `Sun, 06 Nov 1994 08:49:37 GMT`.
///
/// Instants outside years 0000 to 9999 are clamped to the nearest bound.
pub fn http_date(at: DateTime<Utc>) -> String {
    clamp_to_http_range(at).format(HTTP_DATE_FORMAT).to_string()
}
