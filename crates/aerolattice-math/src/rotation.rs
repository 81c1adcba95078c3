//! Quaternion rotation of 3-vectors and rigid-body motion.
//!
//! Rotations are applied as the sandwich product `q · v · q⁻¹` with the
//! inverse supplied by the caller, so a driver that keeps its own
//! (possibly non-normalized) quaternion pair gets exactly the operator it
//! passed in.

use glam::{DQuat, DVec3};

/// Rotates `v` by `q · v · q_inv`, treating `v` as a pure quaternion.
#[inline]
pub fn rotate_vector(q: DQuat, q_inv: DQuat, v: DVec3) -> DVec3 {
    let p = q * DQuat::from_xyzw(v.x, v.y, v.z, 0.0) * q_inv;
    DVec3::new(p.x, p.y, p.z)
}

/// A rigid-body motion: rotation about a pivot followed by a translation.
///
/// Points map as `pivot + R·(p - pivot) + translation`; directions are
/// only rotated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RigidMotion {
    pub translation: DVec3,
    pub pivot: DVec3,
    pub rotation: DQuat,
    pub inverse_rotation: DQuat,
}

impl RigidMotion {
    /// Builds a motion from a unit quaternion, deriving its inverse.
    pub fn new(translation: DVec3, pivot: DVec3, rotation: DQuat) -> Self {
        Self {
            translation,
            pivot,
            rotation,
            inverse_rotation: rotation.inverse(),
        }
    }

    /// The motion that does nothing.
    pub fn identity() -> Self {
        Self::new(DVec3::ZERO, DVec3::ZERO, DQuat::IDENTITY)
    }

    #[inline]
    pub fn apply_point(&self, p: DVec3) -> DVec3 {
        self.pivot + self.apply_direction(p - self.pivot) + self.translation
    }

    #[inline]
    pub fn apply_direction(&self, v: DVec3) -> DVec3 {
        rotate_vector(self.rotation, self.inverse_rotation, v)
    }

    /// The algebraic inverse: same pivot, rotation `R⁻¹`, translation `-R⁻¹·T`.
    pub fn inverse(&self) -> Self {
        Self {
            translation: -rotate_vector(self.inverse_rotation, self.rotation, self.translation),
            pivot: self.pivot,
            rotation: self.inverse_rotation,
            inverse_rotation: self.rotation,
        }
    }
}

impl Default for RigidMotion {
    fn default() -> Self {
        Self::identity()
    }
}
