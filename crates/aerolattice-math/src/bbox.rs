//! Axis-aligned bounding boxes.
//!
//! Each loop keeps one of these current so an external spatial index
//! (nearest-panel queries, far-field culling) can read it without touching
//! loop topology.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::rotation::RigidMotion;

/// An axis-aligned box. The empty box has `min > max` on every axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {
    /// A box containing nothing; any `include_point` makes it non-empty.
    pub fn empty() -> Self {
        Self {
            min: DVec3::splat(f64::INFINITY),
            max: DVec3::splat(f64::NEG_INFINITY),
        }
    }

    /// Smallest box containing every point.
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = DVec3>,
    {
        let mut bbox = Self::empty();
        for p in points {
            bbox.include_point(p);
        }
        bbox
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grows the box to contain `p`.
    #[inline]
    pub fn include_point(&mut self, p: DVec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Grows the box to contain `other`.
    pub fn merge(&mut self, other: &BoundingBox) {
        if other.is_empty() {
            return;
        }
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub fn contains_point(&self, p: DVec3) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }

    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.cmple(other.max).all()
            && other.min.cmple(self.max).all()
    }

    pub fn center(&self) -> DVec3 {
        0.5 * (self.min + self.max)
    }

    /// Edge lengths along each axis. Zero for an empty box.
    pub fn extent(&self) -> DVec3 {
        if self.is_empty() {
            DVec3::ZERO
        } else {
            self.max - self.min
        }
    }

    /// The eight corners, in binary order of (x, y, z) ∈ {min, max}.
    pub fn corners(&self) -> [DVec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            DVec3::new(lo.x, lo.y, lo.z),
            DVec3::new(hi.x, lo.y, lo.z),
            DVec3::new(lo.x, hi.y, lo.z),
            DVec3::new(hi.x, hi.y, lo.z),
            DVec3::new(lo.x, lo.y, hi.z),
            DVec3::new(hi.x, lo.y, hi.z),
            DVec3::new(lo.x, hi.y, hi.z),
            DVec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Axis-aligned box around this box's corners after a rigid motion.
    ///
    /// Conservative: a rotated box is re-bounded, so repeated rotations
    /// of the same box only ever grow it. Callers that own the underlying
    /// points should rebuild from those instead.
    pub fn transformed(&self, motion: &RigidMotion) -> Self {
        if self.is_empty() {
            return *self;
        }
        Self::from_points(self.corners().into_iter().map(|c| motion.apply_point(c)))
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::empty()
    }
}
