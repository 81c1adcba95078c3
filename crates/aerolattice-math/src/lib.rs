//! # aerolattice-math
//!
//! Geometric primitives for the aerolattice core.
//!
//! Provides:
//! - Re-exports of double-precision `glam` types (`DVec3`, `DQuat`, etc.)
//! - Quaternion sandwich rotation and rigid-body motion
//! - Axis-aligned bounding boxes for external spatial indices
//! - The regularized Biot-Savart kernel for straight vortex filaments

pub mod bbox;
pub mod biot_savart;
pub mod rotation;

// Re-export glam types as the canonical math types for aerolattice.
pub use glam::{DMat3, DQuat, DVec2, DVec3, EulerRot};

pub use bbox::BoundingBox;
pub use biot_savart::{filament_velocity, CoreModel};
pub use rotation::RigidMotion;
