//! The copy engine: field-by-name structural merge over dynamic values.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use svckit_core::{is_zero_value, ConvertError, ValueKind};
use thiserror::Error;
use tracing::{debug, warn};

use crate::convert::ConverterRegistry;
use crate::options::{CopyOptions, MismatchPolicy};

#[derive(Debug, Error)]
pub enum CopyError {
    #[error("encode error: {0}")]
    Encode(String),
    #[error("destination rebuild error: {0}")]
    Rebuild(String),
    #[error("no converter from {source} to {target} for field `{field}`")]
    NoConverter {
        field: String,
        source: ValueKind,
        target: ValueKind,
    },
    #[error("conversion failed for field `{field}`: {source}")]
    Convert {
        field: String,
        #[source]
        source: ConvertError,
    },
}

/// A configured copy engine: a converter registry plus matching options.
/// Stateless between invocations and safe to share across threads.
pub struct Copier {
    registry: ConverterRegistry,
    options: CopyOptions,
}

impl Default for Copier {
    /// The model-to-protobuf configuration: stock rules, zero-valued source
    /// fields skipped, case-insensitive matching, mismatches skipped.
    fn default() -> Self {
        Self::new(ConverterRegistry::stock(), CopyOptions::default())
    }
}

impl Copier {
    #[must_use]
    pub fn new(registry: ConverterRegistry, options: CopyOptions) -> Self {
        Self { registry, options }
    }

    #[must_use]
    pub fn options(&self) -> CopyOptions {
        self.options
    }

    /// Extension point for additional conversion rules.
    pub fn registry_mut(&mut self) -> &mut ConverterRegistry {
        &mut self.registry
    }

    /// Copy matching fields of `src` into `dst`.
    ///
    /// `dst` is serialized to discover its field shapes, merged with `src`
    /// under the configured policies, and rebuilt in place. `src` is never
    /// mutated; nothing is aliased between the two.
    pub fn copy<T, S>(&self, dst: &mut T, src: &S) -> Result<(), CopyError>
    where
        T: Serialize + DeserializeOwned,
        S: Serialize + ?Sized,
    {
        let src_value =
            serde_json::to_value(src).map_err(|e| CopyError::Encode(e.to_string()))?;
        let dst_value =
            serde_json::to_value(&*dst).map_err(|e| CopyError::Encode(e.to_string()))?;
        let merged = self.merge_value(dst_value, &src_value, "")?;
        *dst = serde_json::from_value(merged).map_err(|e| CopyError::Rebuild(e.to_string()))?;
        Ok(())
    }

    /// Copy a collection element-wise. Each destination record starts from
    /// `T::default()` and receives one source record; the output length
    /// equals the input length.
    pub fn copy_slice<T, S>(&self, dst: &mut Vec<T>, src: &[S]) -> Result<(), CopyError>
    where
        T: Default + Serialize + DeserializeOwned,
        S: Serialize,
    {
        let mut out = Vec::with_capacity(src.len());
        for item in src {
            let mut element = T::default();
            self.copy(&mut element, item)?;
            out.push(element);
        }
        *dst = out;
        Ok(())
    }

    fn merge_value(&self, dst: Value, src: &Value, path: &str) -> Result<Value, CopyError> {
        if self.options.skip_empty && is_zero_value(src) {
            debug!(field = path, "skip zero source value");
            return Ok(dst);
        }
        match (dst, src) {
            (Value::Object(dst_map), Value::Object(src_map)) => {
                Ok(Value::Object(self.merge_object(dst_map, src_map, path)?))
            }
            // No declared shape to honor; take the source value as-is.
            (Value::Null, _) => Ok(src.clone()),
            (dst, _) => {
                let target = ValueKind::of(&dst);
                if ValueKind::of(src) == target {
                    return Ok(src.clone());
                }
                self.convert_field(dst, src, target, path)
            }
        }
    }

    fn convert_field(
        &self,
        dst: Value,
        src: &Value,
        target: ValueKind,
        path: &str,
    ) -> Result<Value, CopyError> {
        let source = ValueKind::of(src);
        let Some(rule) = self.registry.find(src, target) else {
            return match self.options.on_mismatch {
                MismatchPolicy::Skip => {
                    debug!(
                        field = path,
                        source = %source,
                        target = %target,
                        "no converter; destination field left unmodified"
                    );
                    Ok(dst)
                }
                MismatchPolicy::Error => Err(CopyError::NoConverter {
                    field: path.to_owned(),
                    source,
                    target,
                }),
            };
        };
        match rule.convert(src) {
            Ok(converted) => {
                debug!(field = path, rule = rule.name(), "converted source value");
                Ok(converted)
            }
            Err(err) => match self.options.on_mismatch {
                MismatchPolicy::Skip => {
                    warn!(
                        field = path,
                        rule = rule.name(),
                        error = %err,
                        "conversion failed; destination field left unmodified"
                    );
                    Ok(dst)
                }
                MismatchPolicy::Error => Err(CopyError::Convert {
                    field: path.to_owned(),
                    source: err,
                }),
            },
        }
    }

    fn merge_object(
        &self,
        mut dst: Map<String, Value>,
        src: &Map<String, Value>,
        path: &str,
    ) -> Result<Map<String, Value>, CopyError> {
        for (name, src_val) in src {
            let Some(key) = self.match_field(&dst, name) else {
                debug!(field = %name, "no matching destination field");
                continue;
            };
            let child = if path.is_empty() {
                key.clone()
            } else {
                format!("{path}.{key}")
            };
            let current = dst.remove(&key).unwrap_or(Value::Null);
            let merged = self.merge_value(current, src_val, &child)?;
            dst.insert(key, merged);
        }
        Ok(dst)
    }

    fn match_field(&self, dst: &Map<String, Value>, name: &str) -> Option<String> {
        if dst.contains_key(name) {
            return Some(name.to_owned());
        }
        if !self.options.ignore_case {
            return None;
        }
        dst.keys().find(|k| k.eq_ignore_ascii_case(name)).cloned()
    }
}
