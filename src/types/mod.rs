//! Composite value types carried by clip parameters.
//!
//! These are plain data: constraints on their fields (ranges, which optional
//! parts may be absent) are enforced by the parameter holding the value, not
//! by the type itself.

mod dimensions;
mod lens;
mod rational;
mod timing;
mod transform;

pub use dimensions::Dimensions;
pub use lens::{Encoders, ExposureFalloff, Orientations};
pub use rational::Rational;
pub use timing::{
    Synchronization, SynchronizationOffsets, SynchronizationSource, Timecode, TimecodeFormat,
    Timestamp,
};
pub use transform::{Rotator3, Transform, Vector3};
