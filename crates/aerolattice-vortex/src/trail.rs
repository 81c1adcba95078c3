//! Trailing (wake) vortex poly-line.
//!
//! A trailing vortex is the chain of wake stations shed downstream from
//! one end of a bound vortex. Station 0 is the starting point at the
//! surface; later stations lie further downstream.

use aerolattice_math::{DVec3, RigidMotion};
use serde::{Deserialize, Serialize};

use crate::edge::VortexEdge;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailingVortex {
    points: Vec<DVec3>,
    /// Circulation carried by every segment of the chain.
    pub gamma: f64,
}

impl TrailingVortex {
    pub fn new(points: Vec<DVec3>, gamma: f64) -> Self {
        Self { points, gamma }
    }

    /// Straight wake from `start` along `direction`, split into
    /// `segments` equal pieces of total length `length`.
    pub fn straight(start: DVec3, direction: DVec3, length: f64, segments: usize) -> Self {
        let step = direction.normalize_or_zero() * (length / segments.max(1) as f64);
        let points = (0..=segments).map(|k| start + step * k as f64).collect();
        Self { points, gamma: 0.0 }
    }

    /// Station 0, if the chain has one and it is finite.
    pub fn starting_point(&self) -> Option<DVec3> {
        self.points.first().copied().filter(|p| p.is_finite())
    }

    pub fn has_starting_point(&self) -> bool {
        self.starting_point().is_some()
    }

    #[inline]
    pub fn number_of_points(&self) -> usize {
        self.points.len()
    }

    /// Station `i`, 0-based from the surface.
    #[inline]
    pub fn point(&self, i: usize) -> DVec3 {
        self.points[i]
    }

    #[inline]
    pub fn set_point(&mut self, i: usize, p: DVec3) {
        self.points[i] = p;
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Appends a downstream station.
    pub fn push_point(&mut self, p: DVec3) {
        self.points.push(p);
    }

    /// The chain as filament segments, surface first.
    pub fn edges(&self) -> impl Iterator<Item = VortexEdge> + '_ {
        self.points
            .windows(2)
            .map(move |w| VortexEdge::new(w[0], w[1], self.gamma))
    }

    /// Moves every station rigidly.
    pub fn apply_motion(&mut self, motion: &RigidMotion) {
        for p in &mut self.points {
            *p = motion.apply_point(*p);
        }
    }
}
