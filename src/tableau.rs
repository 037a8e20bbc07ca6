//! The simplex tableau: constraint rows, objective row, RHS column.
//!
//! A `Tableau` only ever exists in augmented (standard) form. Slack-variable
//! augmentation happens in the constructor, so "augment exactly once, before
//! any pivot" holds by construction rather than by a runtime flag.
//!
//! Column layout, for `n` decision variables and `m` constraints:
//!
//! ```text
//! [ 0 .. n )        decision-variable coefficients
//! [ n .. n+m )      slack identity block (1 at column n+i in row i)
//! n + m             right-hand side / objective constant
//! ```

use nalgebra::{DMatrix, RowDVector};

/// An LP in augmented tableau form, mutated in place by pivot operations.
#[derive(Debug, Clone)]
pub(crate) struct Tableau {
    /// Constraint rows, one per original `<=` constraint. Row order is
    /// significant: row `i` owns slack column `n + i`.
    pub(crate) rows: DMatrix<f64>,
    /// Objective row: reduced costs, then the running negated-objective
    /// constant in the last position.
    pub(crate) objective: RowDVector<f64>,
    /// The basic variable of each row: starts as the row's slack column
    /// and is updated by every pivot. A column can look like a unit column
    /// without being basic (any nonzero column of a single-row tableau
    /// does, once normalized), so the basis is tracked, not rediscovered.
    pub(crate) basis: Vec<usize>,
    /// Number of decision variables (columns before the slack block).
    decision_vars: usize,
}

impl Tableau {
    /// Build the augmented tableau from accumulated problem data.
    ///
    /// Each constraint row gets an identity column (1 in its own row, 0 in
    /// the others) plus its RHS as the final element; the objective row gets
    /// a zero coefficient per slack column and a trailing zero constant.
    ///
    /// RHS values are assumed non-negative. Feasibility of the all-slack
    /// starting basis is a precondition, not something this type checks.
    pub(crate) fn augmented(
        objective: &[f64],
        constraints: &[Vec<f64>],
        rhs: &[f64],
    ) -> Self {
        let n = objective.len();
        let m = constraints.len();
        let width = n + m + 1;

        let mut rows = DMatrix::zeros(m, width);
        for (i, coeffs) in constraints.iter().enumerate() {
            for (j, &v) in coeffs.iter().enumerate() {
                rows[(i, j)] = v;
            }
            rows[(i, n + i)] = 1.0;
            rows[(i, width - 1)] = rhs[i];
        }

        let mut obj = RowDVector::zeros(width);
        for (j, &v) in objective.iter().enumerate() {
            obj[j] = v;
        }

        Tableau {
            rows,
            objective: obj,
            basis: (n..n + m).collect(),
            decision_vars: n,
        }
    }

    /// Shared length of every row, including the RHS/constant column.
    pub(crate) fn width(&self) -> usize {
        self.objective.len()
    }

    /// Number of constraint rows.
    pub(crate) fn num_constraints(&self) -> usize {
        self.rows.nrows()
    }

    /// Number of decision variables (excludes slacks and the RHS column).
    pub(crate) fn decision_vars(&self) -> usize {
        self.decision_vars
    }

    /// True iff every reduced cost is non-negative: no entering variable
    /// can improve the objective any further.
    pub(crate) fn is_optimal(&self) -> bool {
        let width = self.width();
        self.objective.iter().take(width - 1).all(|&v| v >= 0.0)
    }
}
