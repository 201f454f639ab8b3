//! Pose types: translation, rotation and named transforms.
//!
//! Translation is in metres relative to the stage origin. The Z axis points
//! up and the coordinate system is right-handed; Y points along the camera's
//! forward direction when pan, tilt and roll are zero.
//!
//! Rotation is given as Euler angles in degrees, applied intrinsically about
//! Z, X, Y (pan, tilt, roll). Angles outside `[0, 360)` are allowed.

use crate::util::{DMat4, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Three-component vector (translation or scale).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// True if every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

/// Three-axis rotation in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rotator3 {
    pub pan: f64,
    pub tilt: f64,
    pub roll: f64,
}

impl Rotator3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(pan: f64, tilt: f64, roll: f64) -> Self {
        Self { pan, tilt, roll }
    }

    /// True if every angle is a finite number.
    pub fn is_finite(&self) -> bool {
        self.pan.is_finite() && self.tilt.is_finite() && self.roll.is_finite()
    }

    /// Rotation as a quaternion (intrinsic ZXY).
    pub fn to_quat(&self) -> DQuat {
        DQuat::from_euler(
            EulerRot::ZXY,
            self.pan.to_radians(),
            self.tilt.to_radians(),
            self.roll.to_radians(),
        )
    }
}

/// A pose in a chain of transforms.
///
/// `name` identifies the transform and `parent` the transform it is relative
/// to. Both, and `scale`, are optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transform {
    pub translation: Vector3,
    pub rotation: Rotator3,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<Vector3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Transform {
    /// Create an unnamed transform without scale.
    pub fn new(translation: Vector3, rotation: Rotator3) -> Self {
        Self {
            translation,
            rotation,
            ..Default::default()
        }
    }

    /// Set the scale.
    pub fn with_scale(mut self, scale: Vector3) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the parent.
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Compute the 4x4 matrix: translate * rotate * scale.
    pub fn matrix(&self) -> DMat4 {
        let scale = self.scale.map(DVec3::from).unwrap_or(DVec3::ONE);
        DMat4::from_scale_rotation_translation(
            scale,
            self.rotation.to_quat(),
            self.translation.into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_matrix() {
        let t = Transform::new(Vector3::ZERO, Rotator3::ZERO);
        assert!(t.matrix().abs_diff_eq(DMat4::IDENTITY, 1e-12));
    }

    #[test]
    fn test_pan_rotates_about_z() {
        let t = Transform::new(Vector3::new(1.0, 2.0, 3.0), Rotator3::new(90.0, 0.0, 0.0));
        let p = t.matrix().transform_point3(DVec3::X);
        assert!(p.abs_diff_eq(DVec3::new(1.0, 3.0, 3.0), 1e-9), "got {:?}", p);
    }

    #[test]
    fn test_scale_applied_before_translation() {
        let t = Transform::new(Vector3::new(0.0, 0.0, 1.0), Rotator3::ZERO)
            .with_scale(Vector3::new(2.0, 2.0, 2.0));
        let p = t.matrix().transform_point3(DVec3::ONE);
        assert!(p.abs_diff_eq(DVec3::new(2.0, 2.0, 3.0), 1e-12));
    }

    #[test]
    fn test_builders() {
        let t = Transform::new(Vector3::ZERO, Rotator3::ZERO)
            .with_name("Camera")
            .with_parent("Dolly");
        assert_eq!(t.name.as_deref(), Some("Camera"));
        assert_eq!(t.parent.as_deref(), Some("Dolly"));
        assert!(t.scale.is_none());
        assert!(t.translation.is_finite());
        assert!(!Vector3::new(f64::NAN, 0.0, 0.0).is_finite());
    }
}
