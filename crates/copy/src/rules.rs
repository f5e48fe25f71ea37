//! Stock conversion rules for model-to-protobuf copies.
//!
//! Each rule re-validates its input and fails with
//! [`ConvertError::SourceMismatch`] when handed a value outside its declared
//! source shape. The list is data, not engine code; callers extend it via
//! [`ConverterRegistry::register`](crate::convert::ConverterRegistry::register).

use chrono::DateTime;
use serde_json::Value;
use svckit_core::{as_nullable, ConvertError, ValueKind, ZERO_TIME_UNIX};

use crate::convert::TypeConverter;

fn parse_epoch(s: &str) -> Result<i64, ConvertError> {
    DateTime::parse_from_rfc3339(s)
        .map(|t| t.timestamp())
        .map_err(|e| ConvertError::Timestamp(e.to_string()))
}

fn is_timestamp(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|s| DateTime::parse_from_rfc3339(s).is_ok())
}

fn mismatch(expected: &'static str, found: &Value) -> ConvertError {
    ConvertError::SourceMismatch {
        expected,
        found: ValueKind::of(found),
    }
}

/// RFC 3339 timestamp string to Unix epoch seconds.
pub fn timestamp_to_epoch() -> TypeConverter {
    TypeConverter::new("timestamp_to_epoch", ValueKind::Number, is_timestamp, |v| {
        let s = v.as_str().ok_or_else(|| mismatch("timestamp string", v))?;
        Ok(Value::from(parse_epoch(s)?))
    })
}

/// Nullable timestamp to epoch seconds. Unset maps to the zero-instant
/// sentinel, whatever instant the wrapper carries.
pub fn null_time_to_epoch() -> TypeConverter {
    TypeConverter::new(
        "null_time_to_epoch",
        ValueKind::Number,
        |v| matches!(as_nullable(v), Some((inner, _)) if is_timestamp(inner)),
        |v| {
            let (inner, valid) =
                as_nullable(v).ok_or_else(|| mismatch("nullable timestamp", v))?;
            if !valid {
                return Ok(Value::from(ZERO_TIME_UNIX));
            }
            let s = inner
                .as_str()
                .ok_or_else(|| mismatch("nullable timestamp", v))?;
            Ok(Value::from(parse_epoch(s)?))
        },
    )
}

/// Nullable string unwrap; unset maps to the empty string.
pub fn null_string_unwrap() -> TypeConverter {
    TypeConverter::new(
        "null_string_unwrap",
        ValueKind::String,
        |v| matches!(as_nullable(v), Some((inner, _)) if inner.is_string()),
        |v| {
            let (inner, valid) = as_nullable(v).ok_or_else(|| mismatch("nullable string", v))?;
            if !valid {
                return Ok(Value::from(""));
            }
            inner
                .as_str()
                .map(Value::from)
                .ok_or_else(|| mismatch("nullable string", v))
        },
    )
}

/// Nullable number unwrap; unset maps to zero. Covers the 64-bit and 32-bit
/// wrappers alike, since widening is implicit in the dynamic representation.
pub fn null_number_unwrap() -> TypeConverter {
    TypeConverter::new(
        "null_number_unwrap",
        ValueKind::Number,
        |v| matches!(as_nullable(v), Some((inner, _)) if inner.is_number()),
        |v| {
            let (inner, valid) = as_nullable(v).ok_or_else(|| mismatch("nullable number", v))?;
            if !valid {
                return Ok(Value::from(0));
            }
            if inner.is_number() {
                Ok(inner.clone())
            } else {
                Err(mismatch("nullable number", v))
            }
        },
    )
}

/// Null source to numeric zero (unset optional timestamp or integer
/// references).
pub fn null_to_zero() -> TypeConverter {
    TypeConverter::new("null_to_zero", ValueKind::Number, Value::is_null, |v| {
        if v.is_null() {
            Ok(Value::from(0))
        } else {
            Err(mismatch("null", v))
        }
    })
}

/// Null source to the empty string (unset optional string references).
pub fn null_to_empty_string() -> TypeConverter {
    TypeConverter::new(
        "null_to_empty_string",
        ValueKind::String,
        Value::is_null,
        |v| {
            if v.is_null() {
                Ok(Value::from(""))
            } else {
                Err(mismatch("null", v))
            }
        },
    )
}

/// The six stock rules, in lookup order.
#[must_use]
pub fn stock_rules() -> Vec<TypeConverter> {
    vec![
        timestamp_to_epoch(),
        null_time_to_epoch(),
        null_string_unwrap(),
        null_number_unwrap(),
        null_to_zero(),
        null_to_empty_string(),
    ]
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use svckit_core::{null_time, ConvertError, NullInt64, NullString, NullTime};

    use super::*;

    #[test]
    fn timestamp_converts_to_exact_epoch_seconds() {
        let now = Utc::now();
        let rule = timestamp_to_epoch();
        let value = serde_json::to_value(now).unwrap();
        assert!(rule.accepts(&value));
        assert_eq!(rule.convert(&value).unwrap(), json!(now.timestamp()));
    }

    #[test]
    fn timestamp_rule_rejects_other_values() {
        let rule = timestamp_to_epoch();
        assert!(!rule.accepts(&json!("plain string")));
        assert!(matches!(
            rule.convert(&json!(12)),
            Err(ConvertError::SourceMismatch { .. })
        ));
    }

    #[test]
    fn unset_nullable_timestamp_maps_to_the_sentinel() {
        let rule = null_time_to_epoch();

        let unset = serde_json::to_value(null_time()).unwrap();
        assert_eq!(rule.convert(&unset).unwrap(), json!(ZERO_TIME_UNIX));

        // The carried instant is ignored when the wrapper is unset.
        let carried = serde_json::to_value(NullTime {
            value: Utc::now(),
            valid: false,
        })
        .unwrap();
        assert_eq!(rule.convert(&carried).unwrap(), json!(ZERO_TIME_UNIX));

        let now = Utc::now();
        let set = serde_json::to_value(NullTime::new(now)).unwrap();
        assert_eq!(rule.convert(&set).unwrap(), json!(now.timestamp()));
    }

    #[test]
    fn nullable_string_unwraps_or_empties() {
        let rule = null_string_unwrap();
        let set = serde_json::to_value(NullString::new("domain".to_owned())).unwrap();
        assert_eq!(rule.convert(&set).unwrap(), json!("domain"));

        let unset = serde_json::to_value(NullString::null()).unwrap();
        assert_eq!(rule.convert(&unset).unwrap(), json!(""));
    }

    #[test]
    fn nullable_number_unwraps_or_zeroes() {
        let rule = null_number_unwrap();
        let set = serde_json::to_value(NullInt64::new(11_111_111_111_111)).unwrap();
        assert_eq!(rule.convert(&set).unwrap(), json!(11_111_111_111_111_i64));

        let unset = serde_json::to_value(NullInt64 {
            value: 5,
            valid: false,
        })
        .unwrap();
        assert_eq!(rule.convert(&unset).unwrap(), json!(0));
    }

    #[test]
    fn null_rules_produce_defined_zeros() {
        assert_eq!(null_to_zero().convert(&json!(null)).unwrap(), json!(0));
        assert_eq!(
            null_to_empty_string().convert(&json!(null)).unwrap(),
            json!("")
        );
        assert!(null_to_zero().convert(&json!("x")).is_err());
    }
}
