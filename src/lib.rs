//! # tableau-simplex
//!
//! A primal simplex solver for linear programs in dense tableau
//! (dictionary) form.
//!
//! tableau-simplex solves problems of the form
//! `minimize c'x subject to Ax <= b, x >= 0` by augmenting the constraints
//! with slack variables and pivoting until every reduced cost is
//! non-negative, or until the problem is detected to be unbounded.
//!
//! ## Quick Start
//!
//! ```
//! use tableau_simplex::prelude::*;
//!
//! // maximize 10 x1 + 50 x2 + 100 x3 (entered as negated minimization
//! // coefficients, the classic profit-tableau convention)
//! let mut solver = SimplexSolver::new(vec![-10.0, -50.0, -100.0]);
//!
//! solver.add_constraint(vec![1.0, 0.0, 0.0], 100.0)?;
//! solver.add_constraint(vec![0.0, 1.0, 0.0], 50.0)?;
//! solver.add_constraint(vec![0.0, 0.0, 1.0], 20.0)?;
//! solver.add_constraint(vec![1.0, 2.0, 3.0], 200.0)?;
//!
//! solver.solve()?;
//!
//! let solution = solver.solution()?;
//! assert_eq!(solution.objective(), 4900.0);
//! assert_eq!(solution.decision_values(), &[40.0, 50.0, 20.0]);
//! # Ok::<(), SimplexError>(())
//! ```
//!
//! ## Preconditions
//!
//! The starting basis is the slack identity block, so the solver assumes:
//!
//! - every constraint is a `<=` inequality with **non-negative** RHS
//! - all variables are implicitly `>= 0`
//!
//! Inputs violating these are not detected; there is no Big-M / two-phase
//! feasibility repair, no handling of free variables or equalities, and no
//! anti-cycling rule. Comparisons are exact (no epsilon tolerance).
//!
//! ## Architecture
//!
//! - **Tableau** holds the augmented constraint rows and objective row as
//!   dense `nalgebra` storage; augmentation is its constructor
//! - **Pivoting** selects the entering column (most negative reduced cost,
//!   first index on ties) and leaving row (minimum-ratio test), then runs
//!   one Gauss-Jordan elimination step
//! - **Solver** drives the loop and exposes the `Building -> Optimal |
//!   Unbounded` state machine; unboundedness surfaces as an error, never a
//!   partial answer

pub mod error;
mod pivot;
pub mod solution;
pub mod solver;
mod tableau;

/// Prelude module for convenient imports.
///
/// ```
/// use tableau_simplex::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, SimplexError};
    pub use crate::solution::Solution;
    pub use crate::solver::{SimplexSolver, SolveStatus};
}

// Re-export main types at crate root
pub use error::{Result, SimplexError};
pub use solution::Solution;
pub use solver::{SimplexSolver, SolveStatus};
