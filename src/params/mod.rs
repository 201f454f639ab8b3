//! Reusable parameter types.
//!
//! Each type implements [`ParameterType`](crate::core::ParameterType) for one
//! semantic kind of value. Concrete clip fields bind these types to a name
//! and sampling in [`crate::model`].
//!
//! - [`numeric`] - Integers, reals, rationals, integer dimensions
//! - [`text`] - Strings, UUID URNs, enumerations, booleans, arrays
//! - [`transform`] - Pose transform chains
//! - [`timing`] - Timestamps, timecode, synchronization
//! - [`lens`] - Encoders, field-of-view scale, exposure fall-off

pub mod lens;
pub mod numeric;
pub mod text;
pub mod timing;
pub mod transform;

pub use lens::{EncodersType, ExposureFalloffType, FovScaleType};
pub use numeric::{IntegerDimensionsType, IntegerType, RationalType, RealType};
pub use text::{new_uuid_urn, ArrayType, BooleanType, EnumType, StringType, UuidUrnType};
pub use timing::{SynchronizationType, TimecodeType, TimestampType};
pub use transform::TransformsType;

use crate::core::{Value, ValueKind};
use crate::util::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Name of a JSON value's type, for decode messages.
pub(crate) fn json_type_name(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Error for a value handed to a parameter of another kind.
pub(crate) fn wrong_kind(expected: ValueKind, value: &Value) -> Error {
    Error::mismatch(expected, value.kind())
}

/// Encode a composite value through its serde representation.
pub(crate) fn encode<T: Serialize>(value: &T) -> Result<JsonValue> {
    Ok(serde_json::to_value(value)?)
}

/// Decode a composite value; every structural problem is a decode error.
pub(crate) fn decode<T: DeserializeOwned>(json: &JsonValue) -> Result<T> {
    T::deserialize(json).map_err(|e| Error::decode(e.to_string()))
}

/// Check that a real is finite and, if given, at least `minimum`.
pub(crate) fn real_in_range(value: f64, minimum: Option<f64>) -> bool {
    value.is_finite() && minimum.map_or(true, |m| value >= m)
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::core::{ParameterType, Value};
    use serde_json::Value as JsonValue;

    /// Check an instance against a schema fragment.
    pub fn conforms(schema: &JsonValue, instance: &JsonValue) -> bool {
        jsonschema::validator_for(schema)
            .expect("generated schema compiles")
            .is_valid(instance)
    }

    /// Assert the round-trip law and schema conformance for a valid value.
    pub fn assert_round_trip(ty: &dyn ParameterType, value: Value) {
        assert!(ty.validate(&value), "expected valid: {:?}", value);
        let json = ty.to_json(&value).expect("encode");
        assert!(
            conforms(&ty.make_json_schema(), &json),
            "encoded value does not match schema: {}",
            json
        );
        let decoded = ty.from_json(&json).expect("decode");
        assert_eq!(decoded, value);
    }
}
