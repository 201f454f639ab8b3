//! Clip model: the concrete fields of a camera clip.
//!
//! - [`parameters`] - Descriptor of every clip field
//! - [`Clip`] - The record, with typed accessors per field

mod clip;
pub mod parameters;

pub use clip::Clip;
pub use parameters::TIMING_MODES;
