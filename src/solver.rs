//! The solver: constraint accumulation, the solve loop, and its state
//! machine.
//!
//! States move `Building -> Optimal | Unbounded`; the augmented and
//! iterating phases of a solve are transient inside [`SimplexSolver::solve`]
//! and never observable from outside. Both terminal states are sticky:
//! re-solving performs zero pivots.

use crate::error::{Result, SimplexError};
use crate::solution::Solution;
use crate::tableau::Tableau;

/// Observable solver state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// Accepting constraints; `solve()` has not been called.
    Building,
    /// Optimal solution found.
    Optimal,
    /// Problem is unbounded.
    Unbounded,
}

/// Primal simplex solver for LPs of the form
/// `minimize c'x  subject to  Ax <= b, x >= 0`.
///
/// Constraints accumulate before the solve; `solve()` augments them with
/// slack variables and pivots to a terminal state; the solution is then read
/// off the final tableau.
///
/// # Preconditions
///
/// All constraints are `<=` with non-negative RHS, so the all-slack basis is
/// feasible. Violated inputs are not detected: no feasibility repair (Big-M,
/// two-phase) is performed, and degenerate cycling is not guarded against.
///
/// # Example
///
/// ```
/// use tableau_simplex::SimplexSolver;
///
/// // maximize 30 x1 + 60 x2 + 120 x3, entered as minimization coefficients
/// let mut solver = SimplexSolver::new(vec![-30.0, -60.0, -120.0]);
/// solver.add_constraint(vec![1.0, 0.0, 0.0], 100.0).unwrap();
/// solver.add_constraint(vec![0.0, 1.0, 0.0], 25.0).unwrap();
/// solver.add_constraint(vec![0.0, 0.0, 1.0], 10.0).unwrap();
/// solver.add_constraint(vec![1.0, 2.0, 3.0], 150.0).unwrap();
///
/// solver.solve().unwrap();
/// let solution = solver.solution().unwrap();
/// assert_eq!(solution.objective(), 4800.0);
/// assert_eq!(solution.decision_values(), &[70.0, 25.0, 10.0]);
/// ```
#[derive(Debug, Clone)]
pub struct SimplexSolver {
    objective: Vec<f64>,
    constraints: Vec<Vec<f64>>,
    rhs: Vec<f64>,
    tableau: Option<Tableau>,
    status: SolveStatus,
    pivots: u32,
}

impl SimplexSolver {
    /// Create a solver for the given objective coefficients.
    pub fn new(objective: Vec<f64>) -> Self {
        SimplexSolver {
            objective,
            constraints: Vec::new(),
            rhs: Vec::new(),
            tableau: None,
            status: SolveStatus::Building,
            pivots: 0,
        }
    }

    /// Add one `<=` constraint row. Call order fixes the row index, which
    /// fixes which slack variable the row owns.
    ///
    /// # Errors
    ///
    /// - [`SimplexError::ConstraintAfterSolve`] once `solve()` has run;
    ///   constraints are rejected rather than silently ignored.
    /// - [`SimplexError::DimensionMismatch`] when the coefficient count does
    ///   not match the objective's.
    pub fn add_constraint(&mut self, coefficients: Vec<f64>, rhs: f64) -> Result<()> {
        if self.status != SolveStatus::Building {
            return Err(SimplexError::ConstraintAfterSolve);
        }
        if coefficients.len() != self.objective.len() {
            return Err(SimplexError::DimensionMismatch {
                expected: self.objective.len(),
                got: coefficients.len(),
            });
        }
        self.constraints.push(coefficients);
        self.rhs.push(rhs);
        Ok(())
    }

    /// Solve to a terminal state: augment, then repeat {entering column,
    /// leaving row, pivot} until optimal or unbounded.
    ///
    /// Calling again on a terminal solver performs zero pivots: an
    /// `Optimal` solver returns `Ok(())`, an `Unbounded` one returns the
    /// error again.
    ///
    /// # Errors
    ///
    /// [`SimplexError::Unbounded`] when the minimum-ratio test finds no
    /// eligible row. Detection halts the loop immediately; no further pivot
    /// is applied, and the solver stays in the `Unbounded` state.
    pub fn solve(&mut self) -> Result<()> {
        match self.status {
            SolveStatus::Optimal => return Ok(()),
            SolveStatus::Unbounded => return Err(SimplexError::Unbounded),
            SolveStatus::Building => {}
        }

        let mut tableau = Tableau::augmented(&self.objective, &self.constraints, &self.rhs);

        let result = loop {
            let Some(col) = tableau.entering_column() else {
                self.status = SolveStatus::Optimal;
                break Ok(());
            };
            match tableau.leaving_row(col) {
                Ok(row) => {
                    tableau.pivot(row, col);
                    self.pivots += 1;
                }
                Err(err) => {
                    self.status = SolveStatus::Unbounded;
                    break Err(err);
                }
            }
        };

        self.tableau = Some(tableau);
        result
    }

    /// The solution read off the final tableau.
    ///
    /// Only meaningful once `solve()` has reached the optimal state; in the
    /// `Building` or `Unbounded` states this returns
    /// [`SimplexError::NotSolved`] instead of a misleading assignment.
    pub fn solution(&self) -> Result<Solution> {
        if self.status != SolveStatus::Optimal {
            return Err(SimplexError::NotSolved);
        }
        // tableau is always present in the Optimal state
        let tableau = self.tableau.as_ref().ok_or(SimplexError::NotSolved)?;
        Ok(tableau.extract_solution(self.pivots))
    }

    /// Current state of the solver.
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    /// True iff the tableau has reached optimality. False while building.
    pub fn is_optimal(&self) -> bool {
        self.tableau.as_ref().is_some_and(Tableau::is_optimal)
    }

    /// Number of pivot operations performed so far.
    pub fn pivots(&self) -> u32 {
        self.pivots
    }
}
