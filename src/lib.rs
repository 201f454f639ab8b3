//! # camdkit
//!
//! Camera-tracking metadata for virtual production: lens state, camera pose
//! and timing of a clip, with JSON encoding and JSON Schema generation.
//!
//! Every field of a clip is described by a static [`Parameter`](core::Parameter)
//! that knows its wire name, units and sampling, and how to validate, encode,
//! decode and describe its values. A [`Clip`](model::Clip) is a record built
//! from a table of such fields.
//!
//! ## Modules
//!
//! - [`util`] - Errors and math helpers
//! - [`core`] - Parameter framework: values, descriptors, containers, schemas
//! - [`types`] - Composite value types (rational, transforms, timecode, ...)
//! - [`params`] - Reusable parameter types
//! - [`model`] - The clip and its fields
//! - [`io`] - Reading and writing JSON documents
//!
//! ## Example
//!
//! ```ignore
//! use camdkit::prelude::*;
//!
//! let mut clip = Clip::new();
//! clip.set_lens_make("Cooke");
//! clip.set_focal_length([35, 35, 36]);
//! clip.validate()?;
//!
//! let json = clip.to_json()?;
//! let frame = clip.extract(1).to_json()?;
//! let schema = Clip::make_json_schema();
//! ```

pub mod util;
pub mod core;
pub mod types;
pub mod params;
pub mod model;
pub mod io;

// Re-export commonly used types
pub use util::{Error, Result, ValidationFailure};
pub use model::Clip;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{Error, Result, ValidationFailure};
    pub use crate::core::{Parameter, ParameterContainer, ParameterType, Sampling, Slot, Value};
    pub use crate::types::*;
    pub use crate::model::Clip;
}
