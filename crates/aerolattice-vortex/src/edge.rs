//! Straight vortex filament segment.

use aerolattice_math::{filament_velocity, CoreModel, DVec3};
use serde::{Deserialize, Serialize};

/// A directed straight filament `start → end` carrying circulation `gamma`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VortexEdge {
    pub start: DVec3,
    pub end: DVec3,
    pub gamma: f64,
}

impl VortexEdge {
    pub fn new(start: DVec3, end: DVec3, gamma: f64) -> Self {
        Self { start, end, gamma }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).length()
    }

    #[inline]
    pub fn midpoint(&self) -> DVec3 {
        0.5 * (self.start + self.end)
    }

    /// Velocity this segment induces at `point` with the given core.
    #[inline]
    pub fn induced_velocity(&self, point: DVec3, core: f64, model: CoreModel) -> DVec3 {
        filament_velocity(point, self.start, self.end, self.gamma, core, model)
    }
}
