//! Lens state types.

use serde::{Deserialize, Serialize};

/// Normalised focus/iris/zoom encoder readings (0.0 to 1.0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Encoders {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iris: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<f64>,
}

impl Encoders {
    pub const fn new(focus: Option<f64>, iris: Option<f64>, zoom: Option<f64>) -> Self {
        Self { focus, iris, zoom }
    }

    /// Present readings, in focus, iris, zoom order.
    pub fn present(&self) -> impl Iterator<Item = f64> + '_ {
        [self.focus, self.iris, self.zoom].into_iter().flatten()
    }
}

/// A horizontal/vertical pair (e.g. field-of-view scale).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Orientations {
    pub horizontal: f64,
    pub vertical: f64,
}

impl Orientations {
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self { horizontal, vertical }
    }
}

/// Coefficients of the lens exposure fall-off (vignetting) polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExposureFalloff {
    pub a1: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub a3: Option<f64>,
}

impl ExposureFalloff {
    pub const fn new(a1: f64, a2: Option<f64>, a3: Option<f64>) -> Self {
        Self { a1, a2, a3 }
    }
}
