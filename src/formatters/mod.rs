use itertools::Itertools;
use serde_json::Value;

/// Turns a resolved context value into the text a field contributes.
///
/// Any `Fn(&Value) -> String` closure is a formatter, so one-off formatting
/// does not need its own type.
pub trait Format: Send + Sync {
    fn format(&self, value: &Value) -> String;
}

impl<F> Format for F
where
    F: Fn(&Value) -> String + Send + Sync,
{
    fn format(&self, value: &Value) -> String {
        self(value)
    }
}

/// Generic stringification dispatched on the value's shape.
///
/// Strings come out raw (no quotes), arrays as `[a b c]` with each element
/// stringified the same way, everything else in its compact JSON form.
pub fn value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Array(items) => format!("[{}]", items.iter().map(value).join(" ")),
        other => other.to_string(),
    }
}

/// Formatter joining array elements with `separator`.
pub fn array(separator: impl Into<String>) -> builtins::Array {
    builtins::Array::new(separator)
}

/// Formatter that ignores its input.
pub fn constant(s: impl Into<String>) -> builtins::Const {
    builtins::Const::new(s)
}

pub mod builtins {
    use super::*;

    /// Default formatter, see [`value`].
    #[derive(Debug, Clone, Copy, Default)]
    pub struct Plain;
    impl Format for Plain {
        fn format(&self, v: &Value) -> String {
            value(v)
        }
    }

    /// Joins each element of an array, stringified with [`value`], by the
    /// separator. Non-array values fall back to [`value`].
    #[derive(Debug, Clone)]
    pub struct Array {
        separator: String,
    }

    impl Array {
        pub fn new(separator: impl Into<String>) -> Self {
            Self {
                separator: separator.into(),
            }
        }

        pub fn separator(&self) -> &str {
            &self.separator
        }
    }

    impl Format for Array {
        fn format(&self, v: &Value) -> String {
            match v {
                Value::Array(items) => items.iter().map(value).join(&self.separator),
                other => value(other),
            }
        }
    }

    #[derive(Debug, Clone)]
    pub struct Const(String);

    impl Const {
        pub fn new(s: impl Into<String>) -> Self {
            Self(s.into())
        }
    }

    impl Format for Const {
        fn format(&self, _: &Value) -> String {
            self.0.clone()
        }
    }
}
