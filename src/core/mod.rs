//! Core layer - the self-describing parameter framework.
//!
//! This module provides:
//! - [`Sampling`] - Static (per clip) or regular (per frame) sampling
//! - [`Value`] / [`ValueKind`] - Dynamic values held by parameters
//! - [`ParameterType`] / [`Parameter`] - Validation, JSON codec and schema of a field
//! - [`ParameterContainer`] - Records built from a static field table
//! - [`schema`] - JSON Schema generation for containers

mod container;
mod parameter;
mod sampling;
pub mod schema;
mod value;

pub use container::{Field, ParameterContainer, Slot};
pub(crate) use container::{store_sequence, store_single};
pub use parameter::{Parameter, ParameterType};
pub use sampling::Sampling;
pub use value::{FromValue, Value, ValueKind};
