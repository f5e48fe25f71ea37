//! Nullable scalar wrappers mirroring database row fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unix epoch seconds of the zero instant `0001-01-01T00:00:00Z`, the
/// sentinel an unset nullable timestamp converts to.
pub const ZERO_TIME_UNIX: i64 = -62_135_596_800;

/// The zero instant itself.
#[must_use]
pub fn zero_time() -> DateTime<Utc> {
    DateTime::from_timestamp(ZERO_TIME_UNIX, 0).expect("zero instant is in range")
}

/// A scalar carrying an explicit unset state distinct from any payload.
/// `valid == false` means unset; consumers ignore the carried `value` and
/// substitute a defined zero-mapping.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Nullable<T> {
    pub value: T,
    pub valid: bool,
}

impl<T> Nullable<T> {
    pub fn new(value: T) -> Self {
        Self { value, valid: true }
    }

    #[must_use]
    pub fn null() -> Self
    where
        T: Default,
    {
        Self {
            value: T::default(),
            valid: false,
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }
}

impl<T: Default> Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: Default> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::new(v),
            None => Self::null(),
        }
    }
}

pub type NullTime = Nullable<DateTime<Utc>>;
pub type NullString = Nullable<String>;
pub type NullInt64 = Nullable<i64>;
pub type NullInt32 = Nullable<i32>;

/// An unset timestamp carrying the zero instant. `DateTime` has no
/// `Default`, so `NullTime` cannot use [`Nullable::null`].
#[must_use]
pub fn null_time() -> NullTime {
    Nullable {
        value: zero_time(),
        valid: false,
    }
}

/// Probe a dynamic value for the serialized [`Nullable`] shape. Returns the
/// carried value and the valid flag.
#[must_use]
pub fn as_nullable(value: &Value) -> Option<(&Value, bool)> {
    let map = value.as_object()?;
    if map.len() != 2 {
        return None;
    }
    let inner = map.get("value")?;
    let valid = map.get("valid")?.as_bool()?;
    Some((inner, valid))
}
