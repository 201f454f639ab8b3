//! Utility types and functions for camdkit.
//!
//! This module contains fundamental types used throughout the library:
//! - [`Error`] / [`Result`] - Error handling
//! - Numeric limits of the wire format and math re-exports from glam

mod error;
mod math;

pub use error::*;
pub use math::*;
