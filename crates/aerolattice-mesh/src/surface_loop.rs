//! The surface loop: one discretization cell of a lifting surface or body.
//!
//! A loop is a plain field bag. Every downstream stage (circulation solve,
//! force integration, multigrid, viewers) reads and writes the fields it
//! needs directly, so everything except the sized topology arrays is public.
//!
//! Topology arrays are sized once, before population, to the loop's arity
//! (3 for triangles, 4 for quads). Indexed accessors are 1-based to match
//! the global node/edge tables; indexing past the sized count panics.

use aerolattice_math::{BoundingBox, DQuat, DVec2, DVec3, RigidMotion};
use aerolattice_types::constants::{
    DEGENERATE_AREA_THRESHOLD, FREE_STREAM_COMPONENTS, MAX_LOOP_NODES, MIN_LOOP_NODES,
    UNIT_NORMAL_TOLERANCE,
};
use aerolattice_types::{EdgeId, LatticeError, LatticeResult, LoopId, NodeId};
use serde::{Deserialize, Serialize};

use crate::geometry::{polygon_area_normal, polygon_centroid, renormalize};

/// Whether a global edge's stored direction agrees with the loop's traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeDirection {
    #[default]
    Forward,
    Reverse,
}

impl EdgeDirection {
    /// `+1` for [`Forward`](Self::Forward), `-1` for [`Reverse`](Self::Reverse).
    #[inline]
    pub fn sign(self) -> i32 {
        match self {
            EdgeDirection::Forward => 1,
            EdgeDirection::Reverse => -1,
        }
    }

    /// Maps a non-negative sign to `Forward`, a negative one to `Reverse`.
    #[inline]
    pub fn from_sign(sign: i32) -> Self {
        if sign < 0 {
            EdgeDirection::Reverse
        } else {
            EdgeDirection::Forward
        }
    }
}

/// Per-edge data a loop keeps about one of its bounding edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoopEdge {
    /// Global edge id.
    pub edge: EdgeId,
    /// Orientation relative to the loop traversal.
    pub direction: EdgeDirection,
    /// Set when the upwind-biased flux scheme treats this edge as upwind.
    pub is_upwind: bool,
    /// Blending weight used by the upwind scheme near leading/trailing edges.
    pub upwind_weight: f64,
}

/// Which geometry representation a loop was generated from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    #[default]
    DegenWing,
    DegenBody,
    Cart3d,
}

/// A polygonal surface element (triangle or quad).
///
/// # Invariants (caller obligations)
/// - node count equals edge count, and is 3 or 4
/// - every stored id is valid in the external tables
/// - finest-level loops have an empty fine list
/// - `coarse_grid_loop` names a loop whose fine list contains this loop
/// - `normal` is unit length and `area` is non-negative
///
/// [`validate`](Self::validate) checks the parts that are visible from a
/// single loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceLoop {
    // ─── Topology ───
    nodes: Vec<NodeId>,
    edges: Vec<LoopEdge>,

    // ─── Identity ───
    pub surface_id: u32,
    pub component_id: u32,
    /// Spanwise strip this loop belongs to.
    pub span_station: u32,
    pub is_trailing_edge_tri: bool,
    pub is_leading_edge_tri: bool,
    /// Carries a lattice vortex (as opposed to a source/sink-only panel).
    pub vortex_loop: bool,
    pub surface_kind: SurfaceKind,
    /// Opaque foreign keys into the originating geometry representations.
    pub degen_body_id: Option<u32>,
    pub degen_wing_id: Option<u32>,
    pub cart3d_id: Option<u32>,

    // ─── Geometry ───
    pub normal: DVec3,
    /// Local camber-line normal, distinct from the curved-surface normal.
    pub flat_plate_normal: DVec3,
    pub centroid: DVec3,
    /// Parametric (surface UV) centroid.
    pub uv_centroid: DVec2,
    /// Camber at the centroid.
    pub camber: f64,
    pub area: f64,
    pub length: f64,
    pub ref_length: f64,
    /// Distance from the camber line, used by the flat-plate correction.
    pub centroid_offset: f64,
    pub bound_box: BoundingBox,
    /// World-space points `bound_box` is rebuilt from after each motion.
    #[serde(default)]
    outline: Vec<DVec3>,

    // ─── Solution ───
    pub gamma: f64,
    pub d_cp: f64,
    pub d_cp_unsteady: f64,
    pub velocity: DVec3,
    /// Velocity induced by the wake alone (induced-drag bookkeeping).
    pub downwash_velocity: DVec3,
    pub force: DVec3,
    pub normal_force: f64,
    /// Karman-Tsien compressibility factor.
    pub kt_factor: f64,
    /// Local free stream: velocity components followed by rate terms.
    pub local_free_stream_velocity: [f64; FREE_STREAM_COMPONENTS],

    // ─── Airfoil section ───
    pub thickness_to_chord: f64,
    pub location_of_max_thickness: f64,
    pub radius_to_chord: f64,

    // ─── Agglomeration ───
    /// Loop on the next coarser level this loop agglomerates into.
    pub coarse_grid_loop: LoopId,
    fine_grid_loops: Vec<LoopId>,
    /// Cleared for loops excluded from force summation.
    pub loop_used: bool,
}

impl Default for SurfaceLoop {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            surface_id: 0,
            component_id: 0,
            span_station: 0,
            is_trailing_edge_tri: false,
            is_leading_edge_tri: false,
            vortex_loop: false,
            surface_kind: SurfaceKind::default(),
            degen_body_id: None,
            degen_wing_id: None,
            cart3d_id: None,
            normal: DVec3::Z,
            flat_plate_normal: DVec3::Z,
            centroid: DVec3::ZERO,
            uv_centroid: DVec2::ZERO,
            camber: 0.0,
            area: 0.0,
            length: 0.0,
            ref_length: 0.0,
            centroid_offset: 0.0,
            bound_box: BoundingBox::empty(),
            outline: Vec::new(),
            gamma: 0.0,
            d_cp: 0.0,
            d_cp_unsteady: 0.0,
            velocity: DVec3::ZERO,
            downwash_velocity: DVec3::ZERO,
            force: DVec3::ZERO,
            normal_force: 0.0,
            kt_factor: 1.0,
            local_free_stream_velocity: [0.0; FREE_STREAM_COMPONENTS],
            thickness_to_chord: 0.0,
            location_of_max_thickness: 0.0,
            radius_to_chord: 0.0,
            coarse_grid_loop: LoopId::UNASSIGNED,
            fine_grid_loops: Vec::new(),
            loop_used: true,
        }
    }
}

fn check_arity(count: usize) -> LatticeResult<()> {
    if !(MIN_LOOP_NODES..=MAX_LOOP_NODES).contains(&count) {
        return Err(LatticeError::InvalidTopology(format!(
            "loop arity must be {MIN_LOOP_NODES} or {MAX_LOOP_NODES}, got {count}"
        )));
    }
    Ok(())
}

impl SurfaceLoop {
    /// Creates a loop with node and edge lists sized to `count`.
    pub fn sized(count: usize) -> LatticeResult<Self> {
        let mut lp = Self::default();
        lp.size_node_list(count)?;
        lp.size_edge_list(count)?;
        Ok(lp)
    }

    // ─── Nodes ───

    /// Allocates the node list. Existing entries are discarded.
    pub fn size_node_list(&mut self, count: usize) -> LatticeResult<()> {
        check_arity(count)?;
        self.nodes = vec![NodeId::UNASSIGNED; count];
        Ok(())
    }

    #[inline]
    pub fn number_of_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Node `i`, 1-based.
    #[inline]
    pub fn node(&self, i: usize) -> NodeId {
        self.nodes[i - 1]
    }

    #[inline]
    pub fn node_mut(&mut self, i: usize) -> &mut NodeId {
        &mut self.nodes[i - 1]
    }

    #[inline]
    pub fn set_node(&mut self, i: usize, id: NodeId) {
        self.nodes[i - 1] = id;
    }

    #[inline]
    pub fn node1(&self) -> NodeId {
        self.nodes[0]
    }

    #[inline]
    pub fn node2(&self) -> NodeId {
        self.nodes[1]
    }

    #[inline]
    pub fn node3(&self) -> NodeId {
        self.nodes[2]
    }

    /// Fourth node; only valid for quads.
    #[inline]
    pub fn node4(&self) -> NodeId {
        self.nodes[3]
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    // ─── Edges ───

    /// Allocates the edge list. Existing entries are discarded.
    pub fn size_edge_list(&mut self, count: usize) -> LatticeResult<()> {
        check_arity(count)?;
        self.edges = vec![LoopEdge::default(); count];
        Ok(())
    }

    #[inline]
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Global id of edge `i`, 1-based.
    #[inline]
    pub fn edge(&self, i: usize) -> EdgeId {
        self.edges[i - 1].edge
    }

    #[inline]
    pub fn edge1(&self) -> EdgeId {
        self.edges[0].edge
    }

    #[inline]
    pub fn edge2(&self) -> EdgeId {
        self.edges[1].edge
    }

    #[inline]
    pub fn edge3(&self) -> EdgeId {
        self.edges[2].edge
    }

    /// Fourth edge; only valid for quads.
    #[inline]
    pub fn edge4(&self) -> EdgeId {
        self.edges[3].edge
    }

    /// Full per-edge record for edge `i`, 1-based.
    #[inline]
    pub fn loop_edge(&self, i: usize) -> &LoopEdge {
        &self.edges[i - 1]
    }

    #[inline]
    pub fn loop_edge_mut(&mut self, i: usize) -> &mut LoopEdge {
        &mut self.edges[i - 1]
    }

    /// Sets edge `i`'s id and orientation, leaving upwind data alone.
    pub fn set_edge(&mut self, i: usize, id: EdgeId, direction: EdgeDirection) {
        let e = &mut self.edges[i - 1];
        e.edge = id;
        e.direction = direction;
    }

    #[inline]
    pub fn edge_direction(&self, i: usize) -> EdgeDirection {
        self.edges[i - 1].direction
    }

    #[inline]
    pub fn edge_is_upwind(&self, i: usize) -> bool {
        self.edges[i - 1].is_upwind
    }

    #[inline]
    pub fn edge_upwind_weight(&self, i: usize) -> f64 {
        self.edges[i - 1].upwind_weight
    }

    pub fn edges(&self) -> &[LoopEdge] {
        &self.edges
    }

    // ─── Agglomeration ───

    /// Allocates the fine-grid list for a coarse-level loop, filled with
    /// unassigned ids. Zero marks a finest-level loop.
    pub fn size_fine_grid_loop_list(&mut self, count: usize) {
        self.fine_grid_loops = vec![LoopId::UNASSIGNED; count];
    }

    #[inline]
    pub fn number_of_fine_grid_loops(&self) -> usize {
        self.fine_grid_loops.len()
    }

    /// Fine loop `i`, 1-based.
    #[inline]
    pub fn fine_grid_loop(&self, i: usize) -> LoopId {
        self.fine_grid_loops[i - 1]
    }

    #[inline]
    pub fn fine_grid_loop_mut(&mut self, i: usize) -> &mut LoopId {
        &mut self.fine_grid_loops[i - 1]
    }

    pub fn fine_grid_loops(&self) -> &[LoopId] {
        &self.fine_grid_loops
    }

    pub fn is_finest_level(&self) -> bool {
        self.fine_grid_loops.is_empty()
    }

    // ─── Geometry ───

    /// Applies a rigid-body motion to the world-space geometry.
    ///
    /// The centroid moves to `pivot + R·(centroid - pivot) + translation`.
    /// Both normals are rotated with the sandwich product built from
    /// `rotation` and `inverse_rotation`, then renormalized. The bounding
    /// box is rebuilt from the moved outline (the polygon vertices from
    /// [`compute_geometry`](Self::compute_geometry), or else the box's own
    /// corners captured on the first motion), so it never grows under
    /// repeated rotation.
    ///
    /// Only current geometry is read; no arrays are reallocated.
    pub fn update_geometry_location(
        &mut self,
        translation: DVec3,
        pivot: DVec3,
        rotation: DQuat,
        inverse_rotation: DQuat,
    ) {
        self.apply_motion(&RigidMotion {
            translation,
            pivot,
            rotation,
            inverse_rotation,
        });
    }

    /// [`update_geometry_location`](Self::update_geometry_location) with a
    /// prebuilt motion.
    pub fn apply_motion(&mut self, motion: &RigidMotion) {
        self.centroid = motion.apply_point(self.centroid);
        self.normal = renormalize(motion.apply_direction(self.normal), self.normal);
        self.flat_plate_normal = renormalize(
            motion.apply_direction(self.flat_plate_normal),
            self.flat_plate_normal,
        );

        if self.outline.is_empty() && !self.bound_box.is_empty() {
            self.outline.extend(self.bound_box.corners());
        }
        for p in &mut self.outline {
            *p = motion.apply_point(*p);
        }
        if !self.outline.is_empty() {
            self.bound_box = BoundingBox::from_points(self.outline.iter().copied());
        }
    }

    /// Points the bounding box is derived from.
    pub fn outline(&self) -> &[DVec3] {
        &self.outline
    }

    /// Derives centroid, area, normals, and bounding box from the global
    /// node table (`node_positions[k]` holds node id `k + 1`).
    ///
    /// A degenerate polygon keeps its previous normals and gets zero area.
    pub fn compute_geometry(&mut self, node_positions: &[DVec3]) -> LatticeResult<()> {
        let mut points = [DVec3::ZERO; MAX_LOOP_NODES];
        let count = self.nodes.len();
        check_arity(count)?;

        for (slot, &id) in points.iter_mut().zip(&self.nodes) {
            if !id.is_assigned() || id.index() >= node_positions.len() {
                return Err(LatticeError::InvalidTopology(format!(
                    "node {:?} outside node table of length {}",
                    id,
                    node_positions.len()
                )));
            }
            *slot = node_positions[id.index()];
        }
        let points = &points[..count];

        let (area, normal) = polygon_area_normal(points);
        self.centroid = polygon_centroid(points);
        self.bound_box = BoundingBox::from_points(points.iter().copied());
        self.outline.clear();
        self.outline.extend_from_slice(points);

        if area < DEGENERATE_AREA_THRESHOLD {
            tracing::warn!(
                surface = self.surface_id,
                centroid = ?self.centroid,
                "degenerate loop, keeping previous normal"
            );
            self.area = 0.0;
        } else {
            self.area = area;
            self.normal = normal;
            self.flat_plate_normal = normal;
        }
        Ok(())
    }

    // ─── Solution ───

    /// Clears all solution fields ahead of a fresh solve.
    pub fn reset_solution(&mut self) {
        self.gamma = 0.0;
        self.d_cp = 0.0;
        self.d_cp_unsteady = 0.0;
        self.velocity = DVec3::ZERO;
        self.downwash_velocity = DVec3::ZERO;
        self.force = DVec3::ZERO;
        self.normal_force = 0.0;
        self.kt_factor = 1.0;
    }

    /// Checks the invariants visible from this loop alone.
    ///
    /// - arity is 3 or 4 and node count equals edge count
    /// - every node/edge id is assigned and inside its table
    /// - area is non-negative and the normals are unit length
    /// - fine-grid ids are assigned (they index the finer level's table,
    ///   so self-reference is checked by `validate_single_table`)
    pub fn validate(&self, node_table_len: usize, edge_table_len: usize) -> LatticeResult<()> {
        check_arity(self.nodes.len())?;
        if self.nodes.len() != self.edges.len() {
            return Err(LatticeError::InvalidTopology(format!(
                "node count ({}) != edge count ({})",
                self.nodes.len(),
                self.edges.len()
            )));
        }

        for (i, id) in self.nodes.iter().enumerate() {
            if !id.is_assigned() || id.index() >= node_table_len {
                return Err(LatticeError::InvalidTopology(format!(
                    "node {} is {:?}, node table length {}",
                    i + 1,
                    id,
                    node_table_len
                )));
            }
        }
        for (i, e) in self.edges.iter().enumerate() {
            if !e.edge.is_assigned() || e.edge.index() >= edge_table_len {
                return Err(LatticeError::InvalidTopology(format!(
                    "edge {} is {:?}, edge table length {}",
                    i + 1,
                    e.edge,
                    edge_table_len
                )));
            }
        }

        if self.area < 0.0 {
            return Err(LatticeError::InvalidGeometry(format!(
                "negative area {}",
                self.area
            )));
        }
        for (name, n) in [("normal", self.normal), ("flat-plate normal", self.flat_plate_normal)] {
            if (n.length() - 1.0).abs() > UNIT_NORMAL_TOLERANCE {
                return Err(LatticeError::InvalidGeometry(format!(
                    "{name} {n:?} is not unit length"
                )));
            }
        }

        if let Some(pos) = self.fine_grid_loops.iter().position(|id| !id.is_assigned()) {
            return Err(LatticeError::InvariantViolation(format!(
                "fine-grid slot {} is unassigned",
                pos + 1
            )));
        }
        Ok(())
    }
}
