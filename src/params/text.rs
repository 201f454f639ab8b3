//! String-like, boolean and array parameter types.

use super::{json_type_name, wrong_kind};
use crate::core::{ParameterType, Value, ValueKind};
use crate::util::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value as JsonValue};

/// Longest string accepted, in characters.
pub const MAX_STRING_LENGTH: usize = 1023;

/// Pattern of a UUID URN such as `urn:uuid:f81d4fae-7dec-11d0-a765-00a0c91e6bf6`.
pub const UUID_URN_PATTERN: &str =
    "^urn:uuid:[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$";

static UUID_URN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(UUID_URN_PATTERN).expect("valid UUID URN pattern"));

/// Generate a random (v4) UUID URN.
pub fn new_uuid_urn() -> String {
    uuid::Uuid::new_v4().urn().to_string()
}

fn decode_string(json: &JsonValue) -> Result<Value> {
    json.as_str()
        .map(Value::from)
        .ok_or_else(|| Error::decode(format!("expected a string, got {}", json_type_name(json))))
}

fn encode_string(value: &Value) -> Result<JsonValue> {
    match value {
        Value::Str(s) => Ok(json!(s)),
        other => Err(wrong_kind(ValueKind::Str, other)),
    }
}

/// Non-empty string of at most [`MAX_STRING_LENGTH`] characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StringType;

impl ParameterType for StringType {
    fn kind(&self) -> ValueKind {
        ValueKind::Str
    }

    fn validate(&self, value: &Value) -> bool {
        matches!(value, Value::Str(s) if (1..=MAX_STRING_LENGTH).contains(&s.chars().count()))
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        encode_string(value)
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        decode_string(json)
    }

    fn make_json_schema(&self) -> JsonValue {
        json!({
            "type": "string",
            "minLength": 1,
            "maxLength": MAX_STRING_LENGTH,
        })
    }
}

/// UUID in URN form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UuidUrnType;

impl ParameterType for UuidUrnType {
    fn kind(&self) -> ValueKind {
        ValueKind::Str
    }

    fn validate(&self, value: &Value) -> bool {
        matches!(value, Value::Str(s) if UUID_URN_RE.is_match(s))
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        encode_string(value)
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        decode_string(json)
    }

    fn make_json_schema(&self) -> JsonValue {
        json!({
            "type": "string",
            "pattern": UUID_URN_PATTERN,
        })
    }
}

/// One of a fixed set of string literals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumType {
    values: &'static [&'static str],
}

impl EnumType {
    pub const fn new(values: &'static [&'static str]) -> Self {
        Self { values }
    }

    /// Allowed literals.
    pub fn values(&self) -> &'static [&'static str] {
        self.values
    }
}

impl ParameterType for EnumType {
    fn kind(&self) -> ValueKind {
        ValueKind::Str
    }

    fn validate(&self, value: &Value) -> bool {
        matches!(value, Value::Str(s) if self.values.contains(&s.as_str()))
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        encode_string(value)
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        decode_string(json)
    }

    fn make_json_schema(&self) -> JsonValue {
        json!({
            "type": "string",
            "enum": self.values,
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BooleanType;

impl ParameterType for BooleanType {
    fn kind(&self) -> ValueKind {
        ValueKind::Bool
    }

    fn validate(&self, value: &Value) -> bool {
        matches!(value, Value::Bool(_))
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        match value {
            Value::Bool(b) => Ok(json!(b)),
            other => Err(wrong_kind(ValueKind::Bool, other)),
        }
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        json.as_bool()
            .map(Value::Bool)
            .ok_or_else(|| Error::decode(format!("expected a boolean, got {}", json_type_name(json))))
    }

    fn make_json_schema(&self) -> JsonValue {
        json!({ "type": "boolean" })
    }
}

/// List whose every element is of the item type.
#[derive(Clone, Copy)]
pub struct ArrayType {
    item: &'static dyn ParameterType,
}

impl ArrayType {
    pub const fn new(item: &'static dyn ParameterType) -> Self {
        Self { item }
    }
}

impl ParameterType for ArrayType {
    fn kind(&self) -> ValueKind {
        ValueKind::Array
    }

    fn validate(&self, value: &Value) -> bool {
        match value {
            Value::Array(items) => items.iter().all(|v| self.item.validate(v)),
            _ => false,
        }
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        match value {
            Value::Array(items) => Ok(JsonValue::Array(
                items
                    .iter()
                    .map(|v| self.item.to_json(v))
                    .collect::<Result<_>>()?,
            )),
            other => Err(wrong_kind(ValueKind::Array, other)),
        }
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        let items = json
            .as_array()
            .ok_or_else(|| Error::decode(format!("expected an array, got {}", json_type_name(json))))?;
        Ok(Value::Array(
            items
                .iter()
                .map(|v| self.item.from_json(v))
                .collect::<Result<_>>()?,
        ))
    }

    fn make_json_schema(&self) -> JsonValue {
        json!({
            "type": "array",
            "items": self.item.make_json_schema(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::test_util::{assert_round_trip, conforms};

    #[test]
    fn test_string() {
        let ty = StringType;
        assert_round_trip(&ty, Value::from("Mo-Sys"));
        assert!(!ty.validate(&Value::from("")));
        assert!(ty.validate(&Value::Str("é".repeat(MAX_STRING_LENGTH))));
        assert!(!ty.validate(&Value::Str("x".repeat(MAX_STRING_LENGTH + 1))));
        assert!(!ty.validate(&Value::Int(1)));
        assert!(!conforms(&ty.make_json_schema(), &json!("")));
        assert!(matches!(ty.from_json(&json!(12)), Err(Error::Decode { .. })));
    }

    #[test]
    fn test_uuid_urn() {
        let ty = UuidUrnType;
        assert_round_trip(&ty, Value::from("urn:uuid:f81d4fae-7dec-11d0-a765-00a0c91e6bf6"));
        assert_round_trip(&ty, Value::Str(new_uuid_urn()));
        assert!(!ty.validate(&Value::from("f81d4fae-7dec-11d0-a765-00a0c91e6bf6")));
        assert!(!ty.validate(&Value::from("urn:uuid:f81d4fae7dec11d0a76500a0c91e6bf6")));
        assert!(!conforms(&ty.make_json_schema(), &json!("urn:uuid:nope")));
    }

    #[test]
    fn test_enum() {
        static MODES: EnumType = EnumType::new(&["external", "internal"]);
        assert_round_trip(&MODES, Value::from("internal"));
        assert!(!MODES.validate(&Value::from("other")));
        assert!(!conforms(&MODES.make_json_schema(), &json!("other")));
        assert_eq!(MODES.values().len(), 2);
    }

    #[test]
    fn test_boolean() {
        assert_round_trip(&BooleanType, Value::Bool(false));
        assert!(!BooleanType.validate(&Value::Int(0)));
        assert!(matches!(BooleanType.from_json(&json!("true")), Err(Error::Decode { .. })));
    }

    #[test]
    fn test_array() {
        static UUIDS: ArrayType = ArrayType::new(&UuidUrnType);
        let value = Value::from(vec![new_uuid_urn(), new_uuid_urn()]);
        assert_round_trip(&UUIDS, value);
        assert_round_trip(&UUIDS, Value::Array(Vec::new()));

        let bad = Value::Array(vec![Value::from(new_uuid_urn()), Value::from("nope")]);
        assert!(!UUIDS.validate(&bad));
        assert!(!UUIDS.validate(&Value::from(new_uuid_urn())));
        assert!(matches!(UUIDS.from_json(&json!("nope")), Err(Error::Decode { .. })));
    }
}
