//! Error types for modular-domains

use thiserror::Error;

/// Errors that can occur while enumerating cosets or locating points
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModularError {
    /// Level is not a positive integer
    #[error("Invalid level: {0} (must be a positive integer)")]
    InvalidLevel(String),

    /// Subgroup name could not be parsed
    #[error("Unknown congruence subgroup: {0} (expected gamma, gamma0 or gamma1)")]
    UnknownSubgroup(String),

    /// Point is not in the upper half-plane
    #[error("Point is outside the upper half-plane")]
    OutsideUpperHalfPlane,

    /// Reduction did not reach the fundamental domain within its budget
    #[error("Reduction exhausted after {iterations} iterations")]
    ReductionExhausted {
        /// Number of iterations spent
        iterations: usize,
    },

    /// Coset representative index past the end of the list
    #[error("Representative index {index} out of range (have {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of available representatives
        len: usize,
    },
}
