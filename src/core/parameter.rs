//! Parameter descriptors.
//!
//! A [`ParameterType`] knows how to validate, encode, decode and describe
//! (as JSON Schema) one kind of value. A [`Parameter`] binds a type to the
//! identity of one field: canonical wire name, sampling, units, section and
//! description. Parameters are `static` data shared by every record.

use super::{Sampling, Value, ValueKind};
use crate::util::Result;
use serde_json::Value as JsonValue;
use std::fmt;

/// Validation, JSON codec and schema for one kind of parameter value.
///
/// Implementations must uphold the round-trip law: for every `v` with
/// `validate(v)`, `from_json(to_json(v)?)? == v`, and `to_json(v)` conforms to
/// `make_json_schema()`.
pub trait ParameterType: Send + Sync {
    /// Kind of [`Value`] this type accepts.
    fn kind(&self) -> ValueKind;

    /// Check a value. Total: values of the wrong kind are simply invalid.
    fn validate(&self, value: &Value) -> bool;

    /// Encode a value. Fails only if the value is of the wrong kind.
    fn to_json(&self, value: &Value) -> Result<JsonValue>;

    /// Decode a value. Ranges are not checked; structure is.
    fn from_json(&self, json: &JsonValue) -> Result<Value>;

    /// JSON Schema of a single encoded sample.
    fn make_json_schema(&self) -> JsonValue;
}

/// Descriptor of one field of a record.
#[derive(Clone, Copy)]
pub struct Parameter {
    canonical_name: &'static str,
    sampling: Sampling,
    units: Option<&'static str>,
    section: Option<&'static str>,
    description: &'static str,
    parameter_type: &'static dyn ParameterType,
}

impl Parameter {
    /// Create a parameter with no units, section or description.
    pub const fn new(
        canonical_name: &'static str,
        sampling: Sampling,
        parameter_type: &'static dyn ParameterType,
    ) -> Self {
        Self {
            canonical_name,
            sampling,
            units: None,
            section: None,
            description: "",
            parameter_type,
        }
    }

    /// Set the units.
    pub const fn with_units(self, units: &'static str) -> Self {
        Self { units: Some(units), ..self }
    }

    /// Set the grouping section.
    pub const fn with_section(self, section: &'static str) -> Self {
        Self { section: Some(section), ..self }
    }

    /// Set the human-readable description.
    pub const fn with_description(self, description: &'static str) -> Self {
        Self { description, ..self }
    }

    /// Name of the field on the wire.
    #[inline]
    pub fn canonical_name(&self) -> &'static str {
        self.canonical_name
    }

    #[inline]
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    #[inline]
    pub fn units(&self) -> Option<&'static str> {
        self.units
    }

    #[inline]
    pub fn section(&self) -> Option<&'static str> {
        self.section
    }

    #[inline]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Kind of value this parameter holds.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        self.parameter_type.kind()
    }

    /// Get the underlying value type.
    pub fn parameter_type(&self) -> &'static dyn ParameterType {
        self.parameter_type
    }

    /// Validate one sample.
    pub fn validate(&self, value: &Value) -> bool {
        self.parameter_type.validate(value)
    }

    /// Encode one sample.
    pub fn to_json(&self, value: &Value) -> Result<JsonValue> {
        self.parameter_type.to_json(value)
    }

    /// Decode one sample. Decode errors name this parameter.
    pub fn from_json(&self, json: &JsonValue) -> Result<Value> {
        self.parameter_type
            .from_json(json)
            .map_err(|e| e.in_field(self.canonical_name))
    }

    /// Schema of one sample (never wrapped in an array).
    pub fn make_json_schema(&self) -> JsonValue {
        self.parameter_type.make_json_schema()
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parameter")
            .field("canonical_name", &self.canonical_name)
            .field("sampling", &self.sampling)
            .field("units", &self.units)
            .field("section", &self.section)
            .field("kind", &self.kind())
            .finish()
    }
}
