//! Field-by-name record copying with declarative type conversion.
//!
//! The engine ([`Copier`]) serializes source and destination to dynamic
//! values, merges them field by field (case-insensitive names, zero-valued
//! source fields skipped, nested records merged recursively), and rebuilds
//! the destination in place. Whenever source and destination shapes differ,
//! a [`ConverterRegistry`] is consulted; the stock rule set covers timestamp
//! and nullable-scalar conversions for model-to-protobuf copies.

pub mod convert;
pub mod copy;
pub mod options;
pub mod pb;
pub mod rules;

pub use crate::convert::{ConverterRegistry, TypeConverter};
pub use crate::copy::{Copier, CopyError};
pub use crate::options::{CopyOptions, MismatchPolicy};
pub use crate::pb::{copy_model_pb, copy_model_pb_slice, model_pb_copier};
