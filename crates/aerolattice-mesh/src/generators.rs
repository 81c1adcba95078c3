//! Procedural lattice generators for tests and benchmarks.
//!
//! These produce deterministic, resolution-configurable flat plates with
//! consistent traversal order, edge orientation, and strip numbering.

use aerolattice_math::DVec3;
use aerolattice_types::{EdgeId, LatticeError, LatticeResult, NodeId};

use crate::surface_loop::{EdgeDirection, SurfaceLoop};

/// A generated lattice: global node and edge tables plus the loops over them.
#[derive(Debug, Clone)]
pub struct PlateLattice {
    /// Node positions; `nodes[k]` is node id `k + 1`.
    pub nodes: Vec<DVec3>,
    /// Edge endpoints in stored direction; `edges[k]` is edge id `k + 1`.
    pub edges: Vec<[NodeId; 2]>,
    pub loops: Vec<SurfaceLoop>,
}

/// Generates a flat rectangular plate of quad loops in the XY plane.
///
/// X runs chordwise over `[0, chord]`, Y spanwise over `[-span/2, span/2]`,
/// and every loop's normal is +Z. Loops are numbered chordwise first.
/// The first chordwise row is flagged leading-edge, the last trailing-edge,
/// and `span_station` is the 1-based spanwise strip.
///
/// Zero panel counts are rejected with [`LatticeError::InvalidTopology`],
/// and a non-positive chord or span with [`LatticeError::InvalidGeometry`].
///
/// # Example
/// ```
/// use aerolattice_mesh::generators::flat_plate;
/// let plate = flat_plate(2, 3, 1.0, 6.0).unwrap();
/// assert_eq!(plate.nodes.len(), 12); // 3×4 nodes
/// assert_eq!(plate.loops.len(), 6);
/// ```
pub fn flat_plate(
    chordwise: usize,
    spanwise: usize,
    chord: f64,
    span: f64,
) -> LatticeResult<PlateLattice> {
    if chordwise == 0 || spanwise == 0 {
        return Err(LatticeError::InvalidTopology(format!(
            "plate needs at least one panel each way, got {chordwise}x{spanwise}"
        )));
    }
    if !(chord.is_finite() && chord > 0.0 && span.is_finite() && span > 0.0) {
        return Err(LatticeError::InvalidGeometry(format!(
            "plate chord and span must be positive, got {chord} and {span}"
        )));
    }

    let nx = chordwise + 1;
    let ny = spanwise + 1;

    let node_id = |i: usize, j: usize| NodeId::from_index(j * nx + i);
    // Chordwise edges (i,j)->(i+1,j) come first, spanwise (i,j)->(i,j+1) after.
    let chord_edge = |i: usize, j: usize| EdgeId::from_index(j * chordwise + i);
    let chord_edge_count = chordwise * ny;
    let span_edge = |i: usize, j: usize| EdgeId::from_index(chord_edge_count + j * nx + i);

    let mut nodes = Vec::with_capacity(nx * ny);
    for j in 0..ny {
        for i in 0..nx {
            let x = chord * i as f64 / chordwise as f64;
            let y = -0.5 * span + span * j as f64 / spanwise as f64;
            nodes.push(DVec3::new(x, y, 0.0));
        }
    }

    let mut edges = Vec::with_capacity(chord_edge_count + nx * spanwise);
    for j in 0..ny {
        for i in 0..chordwise {
            edges.push([node_id(i, j), node_id(i + 1, j)]);
        }
    }
    for j in 0..spanwise {
        for i in 0..nx {
            edges.push([node_id(i, j), node_id(i, j + 1)]);
        }
    }

    let mut loops = Vec::with_capacity(chordwise * spanwise);
    for j in 0..spanwise {
        for i in 0..chordwise {
            let mut lp = SurfaceLoop::sized(4)?;

            // Counter-clockwise seen from +Z
            lp.set_node(1, node_id(i, j));
            lp.set_node(2, node_id(i + 1, j));
            lp.set_node(3, node_id(i + 1, j + 1));
            lp.set_node(4, node_id(i, j + 1));

            lp.set_edge(1, chord_edge(i, j), EdgeDirection::Forward);
            lp.set_edge(2, span_edge(i + 1, j), EdgeDirection::Forward);
            lp.set_edge(3, chord_edge(i, j + 1), EdgeDirection::Reverse);
            lp.set_edge(4, span_edge(i, j), EdgeDirection::Reverse);

            lp.surface_id = 1;
            lp.component_id = 1;
            lp.span_station = j as u32 + 1;
            lp.is_leading_edge_tri = i == 0;
            lp.is_trailing_edge_tri = i + 1 == chordwise;
            lp.vortex_loop = true;
            lp.uv_centroid = aerolattice_math::DVec2::new(
                (i as f64 + 0.5) / chordwise as f64,
                (j as f64 + 0.5) / spanwise as f64,
            );
            lp.length = chord / chordwise as f64;
            lp.ref_length = chord;

            lp.compute_geometry(&nodes)?;
            loops.push(lp);
        }
    }

    Ok(PlateLattice { nodes, edges, loops })
}
