//! # aerolattice-vortex
//!
//! Vortex filaments of the lattice and the velocity they induce.
//!
//! ## Key Types
//!
//! - [`BoundVortex`] — Lift-carrying filament(s) of one spanwise lattice
//!   element, including the starting vortices shed in unsteady runs
//! - [`TrailingVortex`] — Wake poly-line a bound vortex is wired between
//! - [`VortexEdge`] — One straight filament segment with a strength
//! - [`VortexConfig`] — Core model, core radius, and time-stepping settings
//! - [`field`] — Data-parallel sweeps over many vortices and loops

pub mod bound;
pub mod config;
pub mod edge;
pub mod field;
pub mod temporal;
pub mod trail;

pub use bound::BoundVortex;
pub use config::VortexConfig;
pub use edge::VortexEdge;
pub use temporal::{TimeAnalysisType, TimeMode};
pub use trail::TrailingVortex;
