//! Data-parallel sweeps over many vortices and loops.
//!
//! Each sweep is one barrier-separated stage of a time step: rayon returns
//! only after every item is processed, so a sweep that reads vortices never
//! overlaps with one that writes them. Within a sweep every item touches
//! only its own fields.

use aerolattice_math::DVec3;
use aerolattice_mesh::SurfaceLoop;
use rayon::prelude::*;

use crate::bound::BoundVortex;

/// Runs [`BoundVortex::update_gamma`] on every vortex in parallel.
pub fn sync_gammas(vortices: &mut [BoundVortex]) {
    vortices.par_iter_mut().for_each(BoundVortex::update_gamma);
}

/// Velocity induced at `point` by all `vortices`, each with its own core.
pub fn induced_velocity_at(vortices: &[BoundVortex], point: DVec3) -> DVec3 {
    vortices.iter().map(|v| v.induced_velocity(point)).sum()
}

/// Induced velocity at every point, one task per point.
pub fn induced_velocity_at_points(vortices: &[BoundVortex], points: &[DVec3]) -> Vec<DVec3> {
    points
        .par_iter()
        .map(|&p| induced_velocity_at(vortices, p))
        .collect()
}

/// Writes `free_stream + induced` into each loop's `velocity`, sampled at
/// the loop centroid.
pub fn update_loop_velocities(loops: &mut [SurfaceLoop], vortices: &[BoundVortex], free_stream: DVec3) {
    tracing::debug!(loops = loops.len(), vortices = vortices.len(), "loop velocity sweep");
    loops.par_iter_mut().for_each(|lp| {
        lp.velocity = free_stream + induced_velocity_at(vortices, lp.centroid);
    });
}

/// Writes the velocity induced by `wake` alone into each loop's
/// `downwash_velocity`.
pub fn update_loop_downwash(loops: &mut [SurfaceLoop], wake: &[BoundVortex]) {
    tracing::debug!(loops = loops.len(), wake = wake.len(), "loop downwash sweep");
    loops.par_iter_mut().for_each(|lp| {
        lp.downwash_velocity = induced_velocity_at(wake, lp.centroid);
    });
}
