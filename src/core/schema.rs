//! JSON Schema generation for containers.
//!
//! Both schemas are built from the field table alone, independent of any
//! record instance. The frame schema works on a derived view of the table;
//! the shared table itself is never modified.

use super::{Field, Parameter, Sampling};
use serde_json::{json, Map, Value as JsonValue};

/// JSON Schema dialect declared by generated schemas.
pub const SCHEMA_DIALECT: &str = "https://json-schema.org/draft/2020-12/schema";

/// Schema of a regular document: regular fields as arrays of samples,
/// static fields inline.
pub fn make_json_schema(title: &str, description: &str, fields: &[Field]) -> JsonValue {
    let layout = fields.iter().map(|f| (f.parameter, f.parameter.sampling()));
    assemble(title, description, layout)
}

/// Schema of a single frame: static fields dropped, regular fields inline.
pub fn make_static_json_schema(title: &str, description: &str, fields: &[Field]) -> JsonValue {
    assemble(title, description, static_view(fields))
}

/// Derived layout of a single frame: only regular fields, each sampled once.
pub fn static_view(fields: &[Field]) -> impl Iterator<Item = (&'static Parameter, Sampling)> + '_ {
    fields
        .iter()
        .filter(|f| f.parameter.sampling().is_regular())
        .map(|f| (f.parameter, Sampling::Static))
}

/// Schema of one property, wrapped as an array for regular sampling.
pub fn property_schema(parameter: &Parameter, sampling: Sampling) -> JsonValue {
    let mut schema = match sampling {
        Sampling::Static => parameter.make_json_schema(),
        Sampling::Regular => json!({
            "type": "array",
            "items": parameter.make_json_schema(),
        }),
    };

    if let Some(object) = schema.as_object_mut() {
        if !parameter.description().is_empty() {
            object.insert("description".into(), parameter.description().into());
        }
        if let Some(units) = parameter.units() {
            object.insert("units".into(), units.into());
        }
        if let Some(section) = parameter.section() {
            object.insert("section".into(), section.into());
        }
    }
    schema
}

fn assemble(
    title: &str,
    description: &str,
    layout: impl Iterator<Item = (&'static Parameter, Sampling)>,
) -> JsonValue {
    let mut properties = Map::new();
    for (parameter, sampling) in layout {
        properties.insert(
            parameter.canonical_name().to_string(),
            property_schema(parameter, sampling),
        );
    }

    json!({
        "$schema": SCHEMA_DIALECT,
        "title": title,
        "description": description,
        "type": "object",
        "additionalProperties": false,
        "properties": properties,
    })
}
