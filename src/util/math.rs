//! Math type re-exports and numeric limits used by the wire format.
//!
//! Integer ranges follow the fixed-width fields of the transport: signed
//! 32-bit for most counts, unsigned 32-bit for denominators and sub-second
//! parts, unsigned 48-bit for timestamp seconds.

// Re-export glam types
pub use glam::{DMat4, DQuat, DVec3, EulerRot};

/// Largest signed 32-bit value (2^31 - 1).
pub const INT_MAX: i64 = i32::MAX as i64;

/// Smallest signed 32-bit value (-2^31).
pub const INT_MIN: i64 = i32::MIN as i64;

/// Largest unsigned 32-bit value (2^32 - 1).
pub const UINT_MAX: i64 = u32::MAX as i64;

/// Largest unsigned 48-bit value (2^48 - 1).
pub const UINT48_MAX: i64 = (1 << 48) - 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limits() {
        assert_eq!(INT_MAX, 2_147_483_647);
        assert_eq!(INT_MIN, -2_147_483_648);
        assert_eq!(UINT_MAX, 4_294_967_295);
        assert_eq!(UINT48_MAX, 281_474_976_710_655);
    }
}
