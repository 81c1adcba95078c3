//! Polygon geometry for triangle and quad loops.
//!
//! Area and normal come from the Newell vector `½ Σ pᵢ × pᵢ₊₁`, which is
//! exact for planar polygons and gives the mean plane of a warped quad.

use aerolattice_math::DVec3;

/// Returns `(area, unit normal)` of a closed polygon.
///
/// The normal follows the right-hand rule over the vertex order. For a
/// degenerate polygon the area is (near) zero and the normal is zero.
pub fn polygon_area_normal(points: &[DVec3]) -> (f64, DVec3) {
    let n = points.len();
    let mut newell = DVec3::ZERO;
    for i in 0..n {
        newell += points[i].cross(points[(i + 1) % n]);
    }
    let newell = 0.5 * newell;
    let area = newell.length();
    if area > 0.0 {
        (area, newell / area)
    } else {
        (0.0, DVec3::ZERO)
    }
}

/// Vertex-average centroid.
pub fn polygon_centroid(points: &[DVec3]) -> DVec3 {
    if points.is_empty() {
        return DVec3::ZERO;
    }
    points.iter().copied().sum::<DVec3>() / points.len() as f64
}

/// Rescales `v` to unit length, or returns `fallback` when `v` has
/// collapsed to zero.
#[inline]
pub fn renormalize(v: DVec3, fallback: DVec3) -> DVec3 {
    let len = v.length();
    if len > 1e-12 {
        v / len
    } else {
        fallback
    }
}
