//! Zero-value rules backing the copy engine's skip policy.

use chrono::DateTime;
use serde_json::Value;

use crate::nullable::ZERO_TIME_UNIX;

/// Whether a string renders the zero instant. Unset timestamps serialize as
/// `0001-01-01T00:00:00Z`; any RFC 3339 rendering of that instant counts.
#[must_use]
pub fn is_zero_timestamp(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.timestamp() == ZERO_TIME_UNIX)
        .unwrap_or(false)
}

/// Reflect-style zero check over dynamic values: `null`, `false`, numeric
/// zero, the empty string, the zero-instant timestamp string, the empty
/// array, and any object whose members are all zero (an unset [`Nullable`],
/// a defaulted nested record).
///
/// A non-empty array is never zero, even when every element is.
///
/// [`Nullable`]: crate::nullable::Nullable
#[must_use]
pub fn is_zero_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !*b,
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i == 0
            } else if let Some(u) = n.as_u64() {
                u == 0
            } else {
                n.as_f64().is_some_and(|f| f == 0.0)
            }
        }
        Value::String(s) => s.is_empty() || is_zero_timestamp(s),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.values().all(is_zero_value),
    }
}
