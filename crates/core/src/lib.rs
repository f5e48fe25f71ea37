//! Core value model, nullable scalars, and zero-value rules.
//! No async and no IO within this crate.

pub mod errors;
pub mod kind;
pub mod nullable;
pub mod zero;

pub use crate::errors::ConvertError;
pub use crate::kind::ValueKind;
pub use crate::nullable::{
    as_nullable, null_time, zero_time, NullInt32, NullInt64, NullString, NullTime, Nullable,
    ZERO_TIME_UNIX,
};
pub use crate::zero::{is_zero_timestamp, is_zero_value};
