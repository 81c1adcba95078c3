//! Error types for the aerolattice core.
//!
//! All crates return `LatticeResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the aerolattice core.
#[derive(Debug, Error)]
pub enum LatticeError {
    /// Loop topology is malformed (arity, counts, or indices).
    #[error("Invalid topology: {0}")]
    InvalidTopology(String),

    /// Geometry is inconsistent (non-unit normal, negative area).
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A caller broke an operation's precondition.
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A cross-entity invariant was violated (e.g. multigrid linkage).
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Convenience alias for `Result<T, LatticeError>`.
pub type LatticeResult<T> = Result<T, LatticeError>;
