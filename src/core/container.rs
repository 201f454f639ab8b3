//! Parameter containers: records made of many described fields.
//!
//! A container type declares an ordered, immutable table of [`Field`]s and
//! stores one optional [`Slot`] per field. Everything else (validation, JSON
//! encoding/decoding, merging frames into a sequence, projecting a single
//! frame, schema generation) is provided by [`ParameterContainer`] and works
//! purely by walking the table.

use super::{schema, FromValue, Parameter, Sampling, Value};
use crate::util::{Error, Result, ValidationFailure};
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, trace, warn};

/// Binding of a field identifier to its descriptor.
#[derive(Clone, Copy, Debug)]
pub struct Field {
    /// Identifier, unique within the container (e.g. `t_number`).
    pub id: &'static str,
    pub parameter: &'static Parameter,
}

impl Field {
    pub const fn new(id: &'static str, parameter: &'static Parameter) -> Self {
        Self { id, parameter }
    }
}

/// Storage for one field of a record.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    /// One value: a static field, or one frame of a regular field.
    Single(Value),
    /// Per-frame values of a regular field, in frame order.
    Sequence(Vec<Value>),
}

impl Slot {
    /// All values held, in order.
    pub fn values(&self) -> &[Value] {
        match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::Sequence(values) => values,
        }
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Value at a frame index. A single value sits at index 0.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values().get(index)
    }

    /// Consume into a sequence.
    pub fn into_sequence(self) -> Vec<Value> {
        match self {
            Self::Single(value) => vec![value],
            Self::Sequence(values) => values,
        }
    }
}

impl From<Value> for Slot {
    fn from(value: Value) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<Value>> for Slot {
    fn from(values: Vec<Value>) -> Self {
        Self::Sequence(values)
    }
}

/// A record built from a static field table.
///
/// Implementors provide the table and slot storage; slot storage must have
/// exactly one entry per field, in table order.
pub trait ParameterContainer: Default {
    /// Schema title.
    const NAME: &'static str;

    /// Schema description.
    const DESCRIPTION: &'static str;

    /// Ordered field table shared by every instance.
    fn fields() -> &'static [Field];

    fn slots(&self) -> &[Option<Slot>];

    fn slots_mut(&mut self) -> &mut [Option<Slot>];

    // === Table lookup ===

    /// Position of a field in the table.
    fn field_index(id: &str) -> Option<usize> {
        Self::fields().iter().position(|f| f.id == id)
    }

    /// Look up a field by identifier.
    fn field(id: &str) -> Option<&'static Field> {
        Self::fields().iter().find(|f| f.id == id)
    }

    /// Look up a field by its wire name.
    fn field_by_canonical_name(name: &str) -> Option<&'static Field> {
        Self::fields().iter().find(|f| f.parameter.canonical_name() == name)
    }

    // === Slot access ===

    /// Get the slot of a field, if populated.
    fn get(&self, id: &str) -> Option<&Slot> {
        let index = Self::field_index(id)?;
        self.slots()[index].as_ref()
    }

    /// Replace the slot of a field.
    ///
    /// Only the shape is checked: every value must be of the parameter's kind,
    /// static fields take a single value and regular fields a sequence. Ranges
    /// are left to [`validate`](Self::validate).
    ///
    /// Frame records (one inline value per regular field) come from
    /// [`extract`](Self::extract) or [`from_frame_json`](Self::from_frame_json).
    fn set(&mut self, id: &str, slot: Slot) -> Result<()> {
        let index = Self::field_index(id).ok_or_else(|| Error::FieldNotFound(id.to_string()))?;
        let parameter = Self::fields()[index].parameter;

        match (parameter.sampling(), &slot) {
            (Sampling::Static, Slot::Sequence(_)) => {
                return Err(Error::mismatch(
                    format!("single {} value", parameter.kind()),
                    "sequence",
                ));
            }
            (Sampling::Regular, Slot::Single(_)) => {
                return Err(Error::mismatch(
                    format!("sequence of {} values", parameter.kind()),
                    "single value",
                ));
            }
            _ => {}
        }
        if let Some(value) = slot.values().iter().find(|v| v.kind() != parameter.kind()) {
            return Err(Error::mismatch(parameter.kind(), value.kind()));
        }

        self.slots_mut()[index] = Some(slot);
        Ok(())
    }

    /// Unset a field, returning its previous slot.
    fn clear(&mut self, id: &str) -> Option<Slot> {
        let index = Self::field_index(id)?;
        self.slots_mut()[index].take()
    }

    /// Check if no field is populated.
    fn is_empty(&self) -> bool {
        self.slots().iter().all(Option::is_none)
    }

    /// Length of the longest regular sequence.
    fn len_frames(&self) -> usize {
        Self::fields()
            .iter()
            .zip(self.slots())
            .filter(|(f, _)| f.parameter.sampling().is_regular())
            .filter_map(|(_, slot)| slot.as_ref().map(Slot::len))
            .max()
            .unwrap_or(0)
    }

    // === Typed helpers ===

    /// First value of a field, converted to `T`.
    fn single<T: FromValue>(&self, id: &str) -> Option<T> {
        self.get(id)?.get(0)?.to()
    }

    /// All values of a field, converted to `T`.
    fn sequence<T: FromValue>(&self, id: &str) -> Option<Vec<T>> {
        self.get(id)?.values().iter().map(|v| v.to::<T>()).collect()
    }

    // === Validation ===

    /// Every populated value that fails its parameter, in table order.
    fn failures(&self) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();
        for (field, slot) in Self::fields().iter().zip(self.slots()) {
            let Some(slot) = slot else { continue };
            for (i, value) in slot.values().iter().enumerate() {
                if field.parameter.validate(value) {
                    continue;
                }
                failures.push(ValidationFailure {
                    field: field.id,
                    canonical_name: field.parameter.canonical_name(),
                    index: match slot {
                        Slot::Single(_) => None,
                        Slot::Sequence(_) => Some(i),
                    },
                });
            }
        }
        failures
    }

    /// Validate every populated field. Unpopulated fields are always valid.
    fn validate(&self) -> Result<()> {
        let failures = self.failures();
        if failures.is_empty() {
            return Ok(());
        }
        warn!(record = Self::NAME, count = failures.len(), "validation failed");
        Err(Error::Validation { failures })
    }

    /// Boolean form of [`validate`](Self::validate).
    fn is_valid(&self) -> bool {
        self.failures().is_empty()
    }

    // === JSON ===

    /// Encode as a flat object keyed by wire name, in table order.
    ///
    /// Unpopulated fields are omitted. Sequences encode as arrays, single
    /// values inline.
    fn to_json(&self) -> Result<JsonValue> {
        let mut object = Map::new();
        for (field, slot) in Self::fields().iter().zip(self.slots()) {
            let Some(slot) = slot else { continue };
            let parameter = field.parameter;
            let encoded = match slot {
                Slot::Single(value) => parameter.to_json(value)?,
                Slot::Sequence(values) => JsonValue::Array(
                    values
                        .iter()
                        .map(|v| parameter.to_json(v))
                        .collect::<Result<_>>()?,
                ),
            };
            object.insert(parameter.canonical_name().to_string(), encoded);
        }
        Ok(JsonValue::Object(object))
    }

    /// Decode a regular (time series) document. Unknown keys are ignored.
    fn from_json(json: &JsonValue) -> Result<Self> {
        decode_document(json, false)
    }

    /// Decode a single-frame document: regular fields inline, static fields
    /// not part of the frame and ignored.
    fn from_frame_json(json: &JsonValue) -> Result<Self> {
        decode_document(json, true)
    }

    // === Time series ===

    /// Append the regular values of `other` onto this record's sequences.
    ///
    /// A single (frame) value counts as a one-element sequence, so frames can
    /// be merged into a time series. Static fields are untouched and sequence
    /// lengths across fields are not reconciled.
    fn append(&mut self, other: &Self) {
        let mut appended = 0;
        for (index, field) in Self::fields().iter().enumerate() {
            if !field.parameter.sampling().is_regular() {
                continue;
            }
            let Some(incoming) = &other.slots()[index] else { continue };

            let slot = &mut self.slots_mut()[index];
            let mut values = slot.take().map(Slot::into_sequence).unwrap_or_default();
            values.extend_from_slice(incoming.values());
            *slot = Some(Slot::Sequence(values));
            appended += 1;
        }
        debug!(record = Self::NAME, fields = appended, "appended regular fields");
    }

    /// Project one frame out of a time series.
    ///
    /// The new record holds, for each regular field with a value at `index`,
    /// that value inline. Static fields are not copied.
    fn extract(&self, index: usize) -> Self {
        let mut frame = Self::default();
        for (i, field) in Self::fields().iter().enumerate() {
            if !field.parameter.sampling().is_regular() {
                continue;
            }
            if let Some(value) = self.slots()[i].as_ref().and_then(|s| s.get(index)) {
                frame.slots_mut()[i] = Some(Slot::Single(value.clone()));
            }
        }
        trace!(record = Self::NAME, index, "extracted frame");
        frame
    }

    // === Schema ===

    /// JSON Schema of a regular document.
    fn make_json_schema() -> JsonValue {
        schema::make_json_schema(Self::NAME, Self::DESCRIPTION, Self::fields())
    }

    /// JSON Schema of a single frame, as produced by [`extract`](Self::extract).
    fn make_static_json_schema() -> JsonValue {
        schema::make_static_json_schema(Self::NAME, Self::DESCRIPTION, Self::fields())
    }
}

/// Store a single value, for typed setters of static fields.
pub(crate) fn store_single<C: ParameterContainer>(record: &mut C, id: &str, value: impl Into<Value>) {
    if let Some(index) = C::field_index(id) {
        record.slots_mut()[index] = Some(Slot::Single(value.into()));
    }
}

/// Store a sequence, for typed setters of regular fields.
pub(crate) fn store_sequence<C, T>(record: &mut C, id: &str, values: impl IntoIterator<Item = T>)
where
    C: ParameterContainer,
    T: Into<Value>,
{
    if let Some(index) = C::field_index(id) {
        let values = values.into_iter().map(Into::into).collect();
        record.slots_mut()[index] = Some(Slot::Sequence(values));
    }
}

fn decode_document<C: ParameterContainer>(json: &JsonValue, frame: bool) -> Result<C> {
    let object = json.as_object().ok_or_else(|| Error::Decode {
        field: C::NAME.to_string(),
        message: "expected a JSON object".to_string(),
    })?;

    let mut record = C::default();
    for (key, encoded) in object {
        let Some(index) = C::fields()
            .iter()
            .position(|f| f.parameter.canonical_name() == key)
        else {
            trace!(key = %key, "ignoring unknown key");
            continue;
        };
        let parameter = C::fields()[index].parameter;

        let slot = match (parameter.sampling(), frame) {
            (Sampling::Static, true) => {
                trace!(key = %key, "ignoring static key in frame");
                continue;
            }
            (Sampling::Static, false) | (Sampling::Regular, true) => {
                Slot::Single(parameter.from_json(encoded)?)
            }
            (Sampling::Regular, false) => Slot::Sequence(decode_samples(parameter, key, encoded)?),
        };
        record.slots_mut()[index] = Some(slot);
    }
    Ok(record)
}

fn decode_samples(parameter: &Parameter, key: &str, encoded: &JsonValue) -> Result<Vec<Value>> {
    let samples = encoded.as_array().ok_or_else(|| Error::Decode {
        field: key.to_string(),
        message: "expected an array of samples".to_string(),
    })?;
    samples.iter().map(|s| parameter.from_json(s)).collect()
}
