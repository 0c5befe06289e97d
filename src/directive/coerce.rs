//! Directive Coercion Module
//!
//! Applies caller input to a [`DirectiveSet`]. Input that does not map to a
//! settable directive is dropped without error: cache configuration must
//! never fail a request.

use chrono::{DateTime, Utc};

use crate::directive::{Directive, DirectiveSet, Input, Value};

// == Apply ==
/// Applies `inputs` to `set` in order.
///
/// * unknown names are ignored
/// * `false` removes the directive, whatever its kind
/// * `true` sets boolean directives and is ignored for valued ones
/// * numbers set valued directives and are ignored for boolean ones
/// * points in time become the whole seconds from `now` until that time
pub fn apply<'a, I>(set: &mut DirectiveSet, inputs: I, now: DateTime<Utc>)
where
    I: IntoIterator<Item = Input<'a>>,
{
    for input in inputs {
        apply_one(set, input, now);
    }
}

fn apply_one(set: &mut DirectiveSet, input: Input<'_>, now: DateTime<Utc>) {
    let (name, value) = input.into_parts();
    let Some(directive) = Directive::lookup(name) else {
        return;
    };

    match value {
        Value::Bool(false) => {
            set.remove(directive);
        }
        Value::Bool(true) => {
            set.set_flag(directive);
        }
        Value::Number(number) => {
            if let Some(seconds) = whole_seconds(number) {
                set.set_seconds(directive, seconds);
            }
        }
        Value::Time(time) => {
            set.set_seconds(directive, seconds_until(time, now));
        }
    }
}

// == Numeric Coercion ==
/// Truncates toward zero; negatives clamp to `0`, non-finite input is rejected.
pub fn whole_seconds(value: f64) -> Option<u64> {
    if !value.is_finite() {
        return None;
    }
    Some(value.trunc().max(0.0) as u64)
}

/// Whole seconds between `now` and `time`, `0` when `time` is in the past.
///
/// Both instants are truncated to the second before subtracting so that a
/// time built as "now + 60s" still yields 60 when evaluated a few
/// microseconds later.
pub fn seconds_until(time: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    time.timestamp().saturating_sub(now.timestamp()).max(0) as u64
}
