//! Converter registry: the declarative table consulted when direct
//! assignment is not type-compatible.

use std::fmt;

use serde_json::Value;
use svckit_core::{ConvertError, ValueKind};

/// How a rule recognizes its declared source type from a runtime value.
pub type SourceMatcher = Box<dyn Fn(&Value) -> bool + Send + Sync>;
/// The pure conversion function.
pub type ConvertFn = Box<dyn Fn(&Value) -> Result<Value, ConvertError> + Send + Sync>;

/// A single `(source type, destination type) -> conversion` entry.
pub struct TypeConverter {
    name: &'static str,
    matches: SourceMatcher,
    target: ValueKind,
    convert: ConvertFn,
}

impl TypeConverter {
    pub fn new(
        name: &'static str,
        target: ValueKind,
        matches: impl Fn(&Value) -> bool + Send + Sync + 'static,
        convert: impl Fn(&Value) -> Result<Value, ConvertError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            matches: Box::new(matches),
            target,
            convert: Box::new(convert),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn target(&self) -> ValueKind {
        self.target
    }

    /// Whether the rule's declared source type matches `source`.
    #[must_use]
    pub fn accepts(&self, source: &Value) -> bool {
        (self.matches)(source)
    }

    /// Apply the rule. Fails with [`ConvertError::SourceMismatch`] when the
    /// value does not have the declared source shape.
    pub fn convert(&self, source: &Value) -> Result<Value, ConvertError> {
        (self.convert)(source)
    }
}

impl fmt::Debug for TypeConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeConverter")
            .field("name", &self.name)
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

/// Ordered rule table. Lookup scans registration order and returns the first
/// rule whose matcher accepts the source value and whose target equals the
/// destination kind.
#[derive(Debug, Default)]
pub struct ConverterRegistry {
    rules: Vec<TypeConverter>,
}

impl ConverterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock model-to-protobuf rule set; see [`crate::rules`].
    #[must_use]
    pub fn stock() -> Self {
        let mut registry = Self::new();
        for rule in crate::rules::stock_rules() {
            registry.register(rule);
        }
        registry
    }

    pub fn register(&mut self, rule: TypeConverter) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn find(&self, source: &Value, target: ValueKind) -> Option<&TypeConverter> {
        self.rules
            .iter()
            .find(|rule| rule.target == target && rule.accepts(source))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
