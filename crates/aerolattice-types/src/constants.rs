//! Numerical constants and lattice defaults.

use std::f64::consts::PI;

/// 4π, the Biot-Savart normalization.
pub const FOUR_PI: f64 = 4.0 * PI;

/// Smallest supported panel arity (triangle).
pub const MIN_LOOP_NODES: usize = 3;

/// Largest supported panel arity (quadrilateral).
pub const MAX_LOOP_NODES: usize = 4;

/// Number of components in a loop's local free-stream descriptor
/// (three velocity components plus two rate terms).
pub const FREE_STREAM_COMPONENTS: usize = 5;

/// Default vortex core radius (reference-length units).
pub const DEFAULT_CORE_SIZE: f64 = 1.0e-4;

/// Lamb-Oseen core constant. Places the peak swirl velocity at `h = core`.
pub const LAMB_OSEEN_ALPHA: f64 = 1.256_43;

/// Filaments shorter than this contribute no induced velocity.
pub const FILAMENT_LENGTH_EPSILON: f64 = 1.0e-12;

/// Squared-distance threshold below which a field point is treated as
/// lying on a filament axis or endpoint.
pub const AXIS_DISTANCE_EPSILON: f64 = 1.0e-24;

/// Polygons with less area than this are treated as degenerate.
pub const DEGENERATE_AREA_THRESHOLD: f64 = 1.0e-14;

/// Tolerance for unit-length checks on normals.
pub const UNIT_NORMAL_TOLERANCE: f64 = 1.0e-6;
