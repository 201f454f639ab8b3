//! Sampling modes for clip parameters.
//!
//! A parameter either holds one value for the whole clip, or one value per
//! captured frame/packet.

use std::fmt;

/// How often a parameter is sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sampling {
    /// Single value for the entire clip.
    #[default]
    Static,
    /// One value per frame; stored as an ordered sequence.
    Regular,
}

impl Sampling {
    /// Check if this is static sampling.
    #[inline]
    pub fn is_static(&self) -> bool {
        matches!(self, Self::Static)
    }

    /// Check if this is regular (per-frame) sampling.
    #[inline]
    pub fn is_regular(&self) -> bool {
        matches!(self, Self::Regular)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Regular => "regular",
        }
    }
}

impl fmt::Display for Sampling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
