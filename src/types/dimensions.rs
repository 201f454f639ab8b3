//! Two-dimensional extents.

use serde::{Deserialize, Serialize};

/// Width and height of a rectangular area (e.g. a sensor's active area).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Dimensions {
    pub width: i64,
    pub height: i64,
}

impl Dimensions {
    /// Create dimensions from width and height.
    pub const fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    /// Width divided by height. Returns NaN for a zero height.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return f64::NAN;
        }
        self.width as f64 / self.height as f64
    }
}

impl From<(i64, i64)> for Dimensions {
    fn from((width, height): (i64, i64)) -> Self {
        Self::new(width, height)
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} x {}]", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let d = Dimensions::new(36000, 24000);
        assert_eq!(format!("{}", d), "[36000 x 24000]");
        assert!((d.aspect_ratio() - 1.5).abs() < 1e-12);

        let d: Dimensions = (1920, 1080).into();
        assert_eq!(d.width, 1920);
        assert_eq!(d.height, 1080);
    }
}
