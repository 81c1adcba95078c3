//! # aerolattice-types
//!
//! Shared types, identifiers, error types, and numerical constants
//! for the aerolattice vortex-lattice core.
//!
//! This crate has no domain logic. It defines the vocabulary
//! that all other aerolattice crates share.

pub mod constants;
pub mod error;
pub mod ids;

pub use error::{LatticeError, LatticeResult};
pub use ids::{EdgeId, LoopId, NodeId};
