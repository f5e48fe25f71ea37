use thiserror::Error;

use crate::kind::ValueKind;

/// Failure raised by a conversion rule's function.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConvertError {
    /// The value handed to the rule does not have its declared source shape.
    #[error("source value not matching: expected {expected}, got {found}")]
    SourceMismatch {
        expected: &'static str,
        found: ValueKind,
    },
    #[error("timestamp parse error: {0}")]
    Timestamp(String),
    #[error("numeric value out of range: {0}")]
    OutOfRange(String),
}
