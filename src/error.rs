//! Error types for tableau-simplex.

use thiserror::Error;

/// Error type for solver operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SimplexError {
    /// The objective can be improved without limit; no leaving variable
    /// exists for the chosen entering column.
    #[error("problem is unbounded: no row passes the minimum-ratio test")]
    Unbounded,

    /// A constraint row's coefficient count does not match the objective.
    #[error("dimension mismatch: expected {expected} coefficients, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A constraint was added after solving started.
    #[error("constraints cannot be added once solving has started")]
    ConstraintAfterSolve,

    /// A solution was requested before the solver reached the optimal state.
    #[error("no solution available: solver has not reached an optimal state")]
    NotSolved,
}

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, SimplexError>;
