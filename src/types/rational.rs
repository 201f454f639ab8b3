//! Rational numbers as carried on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A rational number `num / denom`.
///
/// Stored exactly as given: no normalisation and no sign folding, so a value
/// round-trips through JSON unchanged. Range checks belong to the parameter
/// that holds the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rational {
    pub num: i64,
    pub denom: i64,
}

impl Rational {
    /// Create a rational from numerator and denominator.
    pub const fn new(num: i64, denom: i64) -> Self {
        Self { num, denom }
    }

    /// Create a whole number (`value / 1`).
    pub const fn whole(value: i64) -> Self {
        Self { num: value, denom: 1 }
    }

    /// Approximate value as a float. Returns NaN for a zero denominator.
    pub fn to_f64(&self) -> f64 {
        if self.denom == 0 {
            return f64::NAN;
        }
        self.num as f64 / self.denom as f64
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::whole(value)
    }
}

impl From<(i64, i64)> for Rational {
    fn from((num, denom): (i64, i64)) -> Self {
        Self::new(num, denom)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rational() {
        let r = Rational::new(24000, 1001);
        assert!((r.to_f64() - 23.976).abs() < 1e-3);
        assert_eq!(format!("{}", r), "24000/1001");

        let w: Rational = 25.into();
        assert_eq!(w, Rational::new(25, 1));
        assert!(Rational::new(1, 0).to_f64().is_nan());
    }

    #[test]
    fn test_not_normalised() {
        // 2/4 and 1/2 are different wire values
        assert_ne!(Rational::new(2, 4), Rational::new(1, 2));
    }
}
