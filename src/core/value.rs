//! Dynamic values held by clip parameters.
//!
//! [`Value`] is a closed set of every semantic type a parameter can carry, so
//! parameters can validate arbitrary values and containers can store fields
//! of different types side by side.

use crate::types::{
    Dimensions, Encoders, ExposureFalloff, Orientations, Rational, Synchronization, Timecode,
    Timestamp, Transform,
};
use std::fmt;

/// A parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Real(f64),
    Str(String),
    Rational(Rational),
    Dimensions(Dimensions),
    Transforms(Vec<Transform>),
    Timestamp(Timestamp),
    Timecode(Timecode),
    Synchronization(Synchronization),
    Encoders(Encoders),
    Orientations(Orientations),
    ExposureFalloff(ExposureFalloff),
    /// Homogeneous list of values.
    Array(Vec<Value>),
}

/// Discriminant of [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Real,
    Str,
    Rational,
    Dimensions,
    Transforms,
    Timestamp,
    Timecode,
    Synchronization,
    Encoders,
    Orientations,
    ExposureFalloff,
    Array,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Int => "integer",
            Self::Real => "real",
            Self::Str => "string",
            Self::Rational => "rational",
            Self::Dimensions => "dimensions",
            Self::Transforms => "transforms",
            Self::Timestamp => "timestamp",
            Self::Timecode => "timecode",
            Self::Synchronization => "synchronization",
            Self::Encoders => "encoders",
            Self::Orientations => "orientations",
            Self::ExposureFalloff => "exposure falloff",
            Self::Array => "array",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Get the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Real(_) => ValueKind::Real,
            Self::Str(_) => ValueKind::Str,
            Self::Rational(_) => ValueKind::Rational,
            Self::Dimensions(_) => ValueKind::Dimensions,
            Self::Transforms(_) => ValueKind::Transforms,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::Timecode(_) => ValueKind::Timecode,
            Self::Synchronization(_) => ValueKind::Synchronization,
            Self::Encoders(_) => ValueKind::Encoders,
            Self::Orientations(_) => ValueKind::Orientations,
            Self::ExposureFalloff(_) => ValueKind::ExposureFalloff,
            Self::Array(_) => ValueKind::Array,
        }
    }

    /// Convert to a concrete type, if the kind matches.
    pub fn to<T: FromValue>(&self) -> Option<T> {
        T::from_value(self)
    }
}

/// Conversion from a [`Value`] back to a concrete type.
pub trait FromValue: Sized {
    /// Returns `None` if the value holds a different kind.
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! impl_value_conversions {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(v) => Some(v.clone()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_value_conversions! {
    Bool => bool,
    Int => i64,
    Real => f64,
    Str => String,
    Rational => Rational,
    Dimensions => Dimensions,
    Transforms => Vec<Transform>,
    Timestamp => Timestamp,
    Timecode => Timecode,
    Synchronization => Synchronization,
    Encoders => Encoders,
    Orientations => Orientations,
    ExposureFalloff => ExposureFalloff,
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

// Lists of strings travel as arrays of string values.
impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::Array(items.into_iter().map(Value::Str).collect())
    }
}

impl FromValue for Vec<String> {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Array(items) => items.iter().map(String::from_value).collect(),
            _ => None,
        }
    }
}
