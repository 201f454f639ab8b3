//! Transform chain parameter type.

use super::{decode, encode, wrong_kind};
use crate::core::{ParameterType, Value, ValueKind};
use crate::types::Transform;
use crate::util::Result;
use serde_json::{json, Value as JsonValue};

/// Non-empty list of transforms, root first.
///
/// Translation and rotation components must be finite; so must the scale
/// when present. Angles are not range-limited.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransformsType;

impl TransformsType {
    fn check(transform: &Transform) -> bool {
        transform.translation.is_finite()
            && transform.rotation.is_finite()
            && transform.scale.map_or(true, |s| s.is_finite())
    }
}

fn vector_schema(keys: [&str; 3]) -> JsonValue {
    let properties: serde_json::Map<String, JsonValue> = keys
        .iter()
        .map(|k| (k.to_string(), json!({ "type": "number" })))
        .collect();
    json!({
        "type": "object",
        "additionalProperties": false,
        "required": keys,
        "properties": properties,
    })
}

impl ParameterType for TransformsType {
    fn kind(&self) -> ValueKind {
        ValueKind::Transforms
    }

    fn validate(&self, value: &Value) -> bool {
        match value {
            Value::Transforms(chain) => !chain.is_empty() && chain.iter().all(Self::check),
            _ => false,
        }
    }

    fn to_json(&self, value: &Value) -> Result<JsonValue> {
        match value {
            Value::Transforms(chain) => encode(chain),
            other => Err(wrong_kind(ValueKind::Transforms, other)),
        }
    }

    fn from_json(&self, json: &JsonValue) -> Result<Value> {
        decode::<Vec<Transform>>(json).map(Value::Transforms)
    }

    fn make_json_schema(&self) -> JsonValue {
        json!({
            "type": "array",
            "minItems": 1,
            "items": {
                "type": "object",
                "additionalProperties": false,
                "required": ["translation", "rotation"],
                "properties": {
                    "translation": vector_schema(["x", "y", "z"]),
                    "rotation": vector_schema(["pan", "tilt", "roll"]),
                    "scale": vector_schema(["x", "y", "z"]),
                    "name": { "type": "string" },
                    "parent": { "type": "string" },
                },
            },
        })
    }
}
