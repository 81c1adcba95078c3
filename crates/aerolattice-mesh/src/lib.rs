//! # aerolattice-mesh
//!
//! The surface loop (panel) entity and the per-loop geometry it carries.
//!
//! ## Key Types
//!
//! - [`SurfaceLoop`] — One triangle or quad of a lifting surface: topology,
//!   geometric descriptors, aerodynamic solution fields, and multigrid links.
//! - [`agglomeration`] — Helpers that write and check fine/coarse linkage.
//! - Procedural generators for test lattices (flat rectangular plates).

pub mod agglomeration;
pub mod generators;
pub mod geometry;
pub mod surface_loop;

pub use surface_loop::{EdgeDirection, LoopEdge, SurfaceKind, SurfaceLoop};
