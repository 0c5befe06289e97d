//! Directive Input Module
//!
//! Typed caller input accepted by the coercion layer, plus the normalized
//! values stored in a [`DirectiveSet`](super::DirectiveSet).

use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};

// == Directive Value ==
/// Normalized value of a stored directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveValue {
    /// Boolean directive is present
    Present,
    /// Whole seconds for valued directives
    Seconds(u64),
}

// == Value ==
/// Raw value supplied for a named directive before coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// `true` sets a boolean directive, `false` removes any directive
    Bool(bool),
    /// Seconds, truncated toward zero when stored
    Number(f64),
    /// A point in time, converted to seconds from the evaluation instant
    Time(DateTime<Utc>),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<Duration> for Value {
    fn from(value: Duration) -> Self {
        Value::Number(value.as_secs() as f64)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Time(value)
    }
}

impl From<SystemTime> for Value {
    fn from(value: SystemTime) -> Self {
        Value::Time(DateTime::<Utc>::from(value))
    }
}

// == Input ==
/// One directive specification as written at the call site.
///
/// `Flag("public")` is shorthand for `Named("public", Value::Bool(true))`.
/// Names may use the symbolic (`max_age`) or wire (`max-age`) spelling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    Flag(&'a str),
    Named(&'a str, Value),
}

impl<'a> Input<'a> {
    pub fn flag(name: &'a str) -> Self {
        Input::Flag(name)
    }

    pub fn named(name: &'a str, value: impl Into<Value>) -> Self {
        Input::Named(name, value.into())
    }

    /// Name and effective value, with flags expanded to `true`.
    pub fn into_parts(self) -> (&'a str, Value) {
        match self {
            Input::Flag(name) => (name, Value::Bool(true)),
            Input::Named(name, value) => (name, value),
        }
    }
}

// == Call-Site Adapter ==
/// Builds a `Vec<Input>` from a shorthand list.
///
/// Bare identifiers become flags, `name = value` pairs become named inputs:
///
/// ```
/// use cache_headers::directives;
/// use cache_headers::directive::Input;
///
/// let inputs = directives![public, max_age = 60, no_cache = false];
/// assert_eq!(inputs[0], Input::Flag("public"));
/// assert_eq!(inputs.len(), 3);
/// ```
#[macro_export]
macro_rules! directives {
    () => {
        ::std::vec::Vec::<$crate::directive::Input<'static>>::new()
    };
    ($($name:ident $(= $value:expr)?),+ $(,)?) => {
        ::std::vec![$($crate::__directive_input!($name $(= $value)?)),+]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __directive_input {
    ($name:ident) => {
        $crate::directive::Input::flag(::std::stringify!($name))
    };
    ($name:ident = $value:expr) => {
        $crate::directive::Input::named(::std::stringify!($name), $value)
    };
}
