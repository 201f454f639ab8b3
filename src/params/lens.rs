//! Lens parameter types.

use super::{decode, encode, real_in_range, wrong_kind};
use crate::core::{ParameterType, Value, ValueKind};
use crate::types::{Encoders, ExposureFalloff, Orientations};
use crate::util::Result;
use serde_json::{json, Value as JsonValue};

/// Normalised focus, iris and zoom encoder readings.
///
/// At least one reading must be present; each lies in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodersType;

impl ParameterType for EncodersType {
    fn kind(&self) -> ValueKind {
        ValueKind::Encoders
    }

    fn validate(&self, value: &Value) -> bool {
        let Value::Encoders(encoders) = value else {
            return false;
        };
        let mut readings = encoders.present().peekable();
        readings.peek().is_some() && readings.all(|v| (0.0..=1.0).contains(&v))
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        match value {
            Value::Encoders(e) => encode(e),
            other => Err(wrong_kind(ValueKind::Encoders, other)),
        }
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        decode::<Encoders>(json).map(Value::Encoders)
    }

    fn make_json_schema(&self) -> JsonValue {
        let reading = json!({ "type": "number", "minimum": 0.0, "maximum": 1.0 });
        json!({
            "type": "object",
            "additionalProperties": false,
            "properties": {
                "focus": reading,
                "iris": reading,
                "zoom": reading,
            },
            "anyOf": [
                { "required": ["focus"] },
                { "required": ["iris"] },
                { "required": ["zoom"] },
            ],
        })
    }
}

/// Horizontal and vertical field-of-view scale factors, both non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FovScaleType;

impl ParameterType for FovScaleType {
    fn kind(&self) -> ValueKind {
        ValueKind::Orientations
    }

    fn validate(&self, value: &Value) -> bool {
        matches!(value, Value::Orientations(o)
            if real_in_range(o.horizontal, Some(0.0)) && real_in_range(o.vertical, Some(0.0)))
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        match value {
            Value::Orientations(o) => encode(o),
            other => Err(wrong_kind(ValueKind::Orientations, other)),
        }
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        decode::<Orientations>(json).map(Value::Orientations)
    }

    fn make_json_schema(&self) -> JsonValue {
        json!({
            "type": "object",
            "additionalProperties": false,
            "required": ["horizontal", "vertical"],
            "properties": {
                "horizontal": { "type": "number", "minimum": 0.0 },
                "vertical": { "type": "number", "minimum": 0.0 },
            },
        })
    }
}

/// Exposure fall-off polynomial coefficients; `a1` is required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExposureFalloffType;

impl ParameterType for ExposureFalloffType {
    fn kind(&self) -> ValueKind {
        ValueKind::ExposureFalloff
    }

    fn validate(&self, value: &Value) -> bool {
        let Value::ExposureFalloff(falloff) = value else {
            return false;
        };
        falloff.a1.is_finite()
            && falloff.a2.map_or(true, f64::is_finite)
            && falloff.a3.map_or(true, f64::is_finite)
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        match value {
            Value::ExposureFalloff(f) => encode(f),
            other => Err(wrong_kind(ValueKind::ExposureFalloff, other)),
        }
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        decode::<ExposureFalloff>(json).map(Value::ExposureFalloff)
    }

    fn make_json_schema(&self) -> JsonValue {
        json!({
            "type": "object",
            "additionalProperties": false,
            "required": ["a1"],
            "properties": {
                "a1": { "type": "number" },
                "a2": { "type": "number" },
                "a3": { "type": "number" },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::test_util::{assert_round_trip, conforms};
    use crate::util::Error;

    #[test]
    fn test_encoders() {
        let ty = EncodersType;
        assert_round_trip(&ty, Value::Encoders(Encoders::new(Some(0.1), Some(0.2), Some(0.3))));
        assert_round_trip(&ty, Value::Encoders(Encoders::new(None, Some(1.0), None)));
        assert!(!ty.validate(&Value::Encoders(Encoders::default())));
        assert!(!ty.validate(&Value::Encoders(Encoders::new(Some(1.5), None, None))));
        assert!(!ty.validate(&Value::Encoders(Encoders::new(Some(0.5), Some(-0.1), None))));
        assert!(!conforms(&ty.make_json_schema(), &json!({})));
    }

    #[test]
    fn test_fov_scale() {
        let ty = FovScaleType;
        assert_round_trip(&ty, Value::Orientations(Orientations::new(1.0, 0.5)));
        assert!(!ty.validate(&Value::Orientations(Orientations::new(-1.0, 1.0))));
        assert!(matches!(ty.from_json(&json!({ "horizontal": 1.0 })), Err(Error::Decode { .. })));
    }

    #[test]
    fn test_exposure_falloff() {
        let ty = ExposureFalloffType;
        assert_round_trip(&ty, Value::ExposureFalloff(ExposureFalloff::new(1.0, None, None)));
        assert_round_trip(
            &ty,
            Value::ExposureFalloff(ExposureFalloff::new(1.0, Some(2.0), Some(-3.5))),
        );
        assert!(!ty.validate(&Value::ExposureFalloff(ExposureFalloff::new(f64::NAN, None, None))));
        assert!(matches!(ty.from_json(&json!({ "a2": 1.0 })), Err(Error::Decode { .. })));
    }
}
