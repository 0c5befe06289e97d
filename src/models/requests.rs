//! Request adapters for the demo API
//!
//! Turns query-string pairs into typed directive input.

use chrono::{DateTime, Utc};

use crate::directive::{Expiry, Input, Value};
use crate::error::{HeaderError, Result};

/// Ordered `name[=value]` pairs taken from a query string.
///
/// `?public&max_age=60&no_cache=false` becomes a flag, a number and a
/// removal, in that order.
#[derive(Debug, Clone, Default)]
pub struct DirectiveQuery {
    pub pairs: Vec<(String, String)>,
}

impl DirectiveQuery {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Parses every pair into an [`Input`].
    ///
    /// Unknown names are passed through untouched; only values that cannot
    /// be read as a boolean, number or RFC 3339 timestamp are rejected.
    pub fn to_inputs(&self) -> Result<Vec<Input<'_>>> {
        self.pairs
            .iter()
            .map(|(name, value)| {
                if value.is_empty() {
                    Ok(Input::Flag(name))
                } else {
                    parse_value(name, value).map(|value| Input::Named(name, value))
                }
            })
            .collect()
    }
}

fn parse_value(name: &str, raw: &str) -> Result<Value> {
    match raw {
        "true" => return Ok(Value::Bool(true)),
        "false" => return Ok(Value::Bool(false)),
        _ => {}
    }
    if let Ok(number) = raw.parse::<f64>() {
        return Ok(Value::Number(number));
    }
    parse_time(raw)
        .map(Value::Time)
        .ok_or_else(|| HeaderError::InvalidValue(format!("{}={}", name, raw)))
}

fn parse_time(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|time| time.with_timezone(&Utc))
}

/// Parses the `/expires/:amount` path segment: seconds or an RFC 3339 time.
pub fn parse_expiry(raw: &str) -> Result<Expiry> {
    if let Ok(seconds) = raw.parse::<i64>() {
        return Ok(Expiry::Seconds(seconds));
    }
    if let Ok(seconds) = raw.parse::<f64>() {
        if seconds.is_finite() {
            return Ok(Expiry::from(seconds));
        }
    }
    parse_time(raw)
        .map(Expiry::At)
        .ok_or_else(|| HeaderError::InvalidValue(format!("expiry={}", raw)))
}
