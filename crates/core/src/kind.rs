use std::fmt;

use serde_json::Value;

/// The six shapes a dynamic value can take. Conversion rules declare a
/// target kind; the copy engine compares kinds to decide between direct
/// assignment and conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// `CopyError::NoConverter` carries a `ValueKind` field named `source`; thiserror
// treats any field named `source` as the error source and requires it to be a
// `std::error::Error`. `ValueKind` already provides the `Debug`/`Display`
// supertraits, so this empty impl satisfies that bound.
impl std::error::Error for ValueKind {}
