//! Numeric parameter types.

use super::{decode, encode, json_type_name, real_in_range, wrong_kind};
use crate::core::{ParameterType, Value, ValueKind};
use crate::types::{Dimensions, Rational};
use crate::util::{Error, Result, INT_MAX, INT_MIN, UINT_MAX};
use serde_json::{json, Value as JsonValue};

/// Integer within an inclusive range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntegerType {
    min: i64,
    max: i64,
}

impl IntegerType {
    /// `1..=2^31-1`
    pub const STRICTLY_POSITIVE: Self = Self::new(1, INT_MAX);

    /// `0..=2^32-1`
    pub const NON_NEGATIVE: Self = Self::new(0, UINT_MAX);

    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

impl ParameterType for IntegerType {
    fn kind(&self) -> ValueKind {
        ValueKind::Int
    }

    fn validate(&self, value: &Value) -> bool {
        matches!(value, Value::Int(v) if (self.min..=self.max).contains(v))
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        match value {
            Value::Int(v) => Ok(json!(v)),
            other => Err(wrong_kind(ValueKind::Int, other)),
        }
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        json.as_i64()
            .map(Value::Int)
            .ok_or_else(|| Error::decode(format!("expected an integer, got {}", json_type_name(json))))
    }

    fn make_json_schema(&self) -> JsonValue {
        json!({
            "type": "integer",
            "minimum": self.min,
            "maximum": self.max,
        })
    }
}

/// Finite real number, optionally bounded below.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RealType {
    minimum: Option<f64>,
}

impl RealType {
    pub const ANY: Self = Self { minimum: None };
    pub const NON_NEGATIVE: Self = Self { minimum: Some(0.0) };
}

impl ParameterType for RealType {
    fn kind(&self) -> ValueKind {
        ValueKind::Real
    }

    fn validate(&self, value: &Value) -> bool {
        matches!(value, Value::Real(v) if real_in_range(*v, self.minimum))
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        match value {
            Value::Real(v) => Ok(json!(v)),
            other => Err(wrong_kind(ValueKind::Real, other)),
        }
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        json.as_f64()
            .map(Value::Real)
            .ok_or_else(|| Error::decode(format!("expected a number, got {}", json_type_name(json))))
    }

    fn make_json_schema(&self) -> JsonValue {
        match self.minimum {
            Some(minimum) => json!({ "type": "number", "minimum": minimum }),
            None => json!({ "type": "number" }),
        }
    }
}

/// Rational with a 32-bit signed numerator range and a positive 32-bit
/// unsigned denominator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RationalType {
    num_min: i64,
    num_max: i64,
}

impl RationalType {
    /// Numerator in `-2^31..=2^31-1`.
    pub const ANY: Self = Self { num_min: INT_MIN, num_max: INT_MAX };

    /// Numerator in `1..=2^31-1`.
    pub const STRICTLY_POSITIVE: Self = Self { num_min: 1, num_max: INT_MAX };
}

impl ParameterType for RationalType {
    fn kind(&self) -> ValueKind {
        ValueKind::Rational
    }

    fn validate(&self, value: &Value) -> bool {
        match value {
            Value::Rational(r) => {
                (self.num_min..=self.num_max).contains(&r.num) && (1..=UINT_MAX).contains(&r.denom)
            }
            _ => false,
        }
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        match value {
            Value::Rational(r) => encode(r),
            other => Err(wrong_kind(ValueKind::Rational, other)),
        }
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        decode::<Rational>(json).map(Value::Rational)
    }

    fn make_json_schema(&self) -> JsonValue {
        json!({
            "type": "object",
            "additionalProperties": false,
            "required": ["num", "denom"],
            "properties": {
                "num": { "type": "integer", "minimum": self.num_min, "maximum": self.num_max },
                "denom": { "type": "integer", "minimum": 1, "maximum": UINT_MAX },
            },
        })
    }
}

/// Width and height, each a non-negative 32-bit signed integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IntegerDimensionsType;

impl ParameterType for IntegerDimensionsType {
    fn kind(&self) -> ValueKind {
        ValueKind::Dimensions
    }

    fn validate(&self, value: &Value) -> bool {
        match value {
            Value::Dimensions(d) => (0..=INT_MAX).contains(&d.width) && (0..=INT_MAX).contains(&d.height),
            _ => false,
        }
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        match value {
            Value::Dimensions(d) => encode(d),
            other => Err(wrong_kind(ValueKind::Dimensions, other)),
        }
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        decode::<Dimensions>(json).map(Value::Dimensions)
    }

    fn make_json_schema(&self) -> JsonValue {
        json!({
            "type": "object",
            "additionalProperties": false,
            "required": ["width", "height"],
            "properties": {
                "width": { "type": "integer", "minimum": 0, "maximum": INT_MAX },
                "height": { "type": "integer", "minimum": 0, "maximum": INT_MAX },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::test_util::{assert_round_trip, conforms};

    #[test]
    fn test_integer_ranges() {
        let ty = IntegerType::STRICTLY_POSITIVE;
        assert!(!ty.validate(&Value::Int(0)));
        assert!(ty.validate(&Value::Int(1)));
        assert!(ty.validate(&Value::Int(INT_MAX)));
        assert!(!ty.validate(&Value::Int(INT_MAX + 1)));
        assert!(!ty.validate(&Value::Real(1.0)));

        let ty = IntegerType::NON_NEGATIVE;
        assert!(ty.validate(&Value::Int(0)));
        assert!(ty.validate(&Value::Int(UINT_MAX)));
        assert!(!ty.validate(&Value::Int(-1)));
    }

    #[test]
    fn test_integer_codec() {
        let ty = IntegerType::new(1, 360_000);
        assert_round_trip(&ty, Value::Int(180_000));

        let schema = ty.make_json_schema();
        assert!(!conforms(&schema, &json!(0)));
        assert!(!conforms(&schema, &json!(360_001)));

        assert!(matches!(ty.from_json(&json!("12")), Err(Error::Decode { .. })));
        assert!(matches!(ty.from_json(&json!(1.5)), Err(Error::Decode { .. })));
        assert!(matches!(ty.to_json(&Value::Bool(true)), Err(Error::TypeMismatch { .. })));
    }

    #[test]
    fn test_real() {
        let ty = RealType::NON_NEGATIVE;
        assert_round_trip(&ty, Value::Real(23.976));
        assert_round_trip(&ty, Value::Real(0.0));
        assert!(!ty.validate(&Value::Real(-0.5)));
        assert!(!ty.validate(&Value::Real(f64::INFINITY)));
        assert!(!ty.validate(&Value::Real(f64::NAN)));
        assert!(!conforms(&ty.make_json_schema(), &json!(-1.0)));

        // Integers on the wire decode as reals
        assert_eq!(ty.from_json(&json!(24)).expect("decode"), Value::Real(24.0));
        assert!(RealType::ANY.validate(&Value::Real(-12.5)));
    }

    #[test]
    fn test_rational() {
        let ty = RationalType::STRICTLY_POSITIVE;
        assert_round_trip(&ty, Value::Rational(Rational::new(24000, 1001)));
        assert!(!ty.validate(&Value::Rational(Rational::new(0, 1))));
        assert!(!ty.validate(&Value::Rational(Rational::new(1, 0))));
        assert!(!ty.validate(&Value::Rational(Rational::new(1, UINT_MAX + 1))));

        let ty = RationalType::ANY;
        assert_round_trip(&ty, Value::Rational(Rational::new(-15, 2)));
        assert!(!ty.validate(&Value::Rational(Rational::new(INT_MIN - 1, 1))));

        let json = ty.to_json(&Value::Rational(Rational::new(3, 4))).expect("encode");
        assert_eq!(json, json!({"num": 3, "denom": 4}));
        assert!(matches!(ty.from_json(&json!({"num": 3})), Err(Error::Decode { .. })));
        assert!(!conforms(&ty.make_json_schema(), &json!({"num": 3, "denom": 0})));
    }

    #[test]
    fn test_dimensions() {
        let ty = IntegerDimensionsType;
        assert_round_trip(&ty, Value::Dimensions(Dimensions::new(36000, 24000)));
        assert!(!ty.validate(&Value::Dimensions(Dimensions::new(-1, 24000))));
        assert!(matches!(ty.from_json(&json!({"width": 10})), Err(Error::Decode { .. })));
        assert!(matches!(
            ty.from_json(&json!({"width": 10, "height": 10, "depth": 1})),
            Err(Error::Decode { .. })
        ));
    }
}
