//! Solution extraction from a terminal tableau.

use nalgebra::DVector;

use crate::tableau::Tableau;

/// Variable assignment and objective value read off an optimal tableau.
#[derive(Debug, Clone)]
pub struct Solution {
    values: DVector<f64>,
    objective: f64,
    decision_vars: usize,
    pivots: u32,
}

impl Solution {
    /// Values of every variable, decision variables first, then slacks.
    pub fn values(&self) -> &[f64] {
        self.values.as_slice()
    }

    /// Values of the decision variables only.
    pub fn decision_values(&self) -> &[f64] {
        &self.values.as_slice()[..self.decision_vars]
    }

    /// The optimal objective value.
    ///
    /// This is the constant accumulated in the objective row — already
    /// sign-adjusted by the elimination process. For a profit-maximization
    /// problem entered with negated coefficients it is the maximum profit.
    pub fn objective(&self) -> f64 {
        self.objective
    }

    /// Number of pivot operations the solve took.
    pub fn pivots(&self) -> u32 {
        self.pivots
    }
}

impl Tableau {
    /// Read off the basic solution: each constraint row backs exactly one
    /// basic variable, which takes the row's RHS value; every other
    /// variable — non-basic or displaced by a degenerate pivot — reads 0.
    ///
    /// The basis is the one tracked through the pivots, never rediscovered
    /// by scanning for unit columns: a column can coincidentally equal a
    /// unit column (in a single-row tableau every nonzero column does) and
    /// must not claim the RHS of the variable actually in the basis.
    pub(crate) fn extract_solution(&self, pivots: u32) -> Solution {
        let last = self.width() - 1;
        let mut values = DVector::zeros(last);

        for (i, &col) in self.basis.iter().enumerate() {
            values[col] = self.rows[(i, last)];
        }

        Solution {
            values,
            objective: self.objective[last],
            decision_vars: self.decision_vars(),
            pivots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn basic_columns_take_rhs_values() {
        // already-terminal tableau: slack columns form the basis
        let t = Tableau::augmented(
            &[2.0, 3.0],
            &[vec![1.0, 1.0], vec![2.0, 1.0]],
            &[4.0, 6.0],
        );
        let solution = t.extract_solution(0);
        assert_relative_eq!(solution.values()[..], [0.0, 0.0, 4.0, 6.0]);
        assert_relative_eq!(solution.objective(), 0.0);
        assert_eq!(solution.decision_values(), &[0.0, 0.0]);
    }

    #[test]
    fn nonbasic_columns_read_as_zero() {
        let t = Tableau::augmented(
            &[1.0, 1.0],
            &[vec![2.0, 1.0], vec![0.5, 1.0]],
            &[3.0, 5.0],
        );
        let solution = t.extract_solution(0);
        // no pivot has happened, so the decision columns are non-basic
        assert_relative_eq!(solution.values()[0], 0.0);
        assert_relative_eq!(solution.values()[1], 0.0);
    }

    #[test]
    fn coincidental_unit_column_does_not_claim_the_rhs() {
        // in a single-row tableau both decision columns read [1.0], yet
        // only the slack is basic; handing each of them the RHS would
        // fabricate the infeasible point (10, 10)
        let t = Tableau::augmented(&[2.0, 3.0], &[vec![1.0, 1.0]], &[10.0]);
        let solution = t.extract_solution(0);
        assert_relative_eq!(solution.values()[..], [0.0, 0.0, 10.0]);
    }

    #[test]
    fn pivot_hands_the_rhs_to_the_entering_variable() {
        let mut t = Tableau::augmented(&[-2.0], &[vec![1.0], vec![1.0]], &[3.0, 8.0]);
        t.pivot(0, 0);
        let solution = t.extract_solution(1);
        // x0 replaced the first slack in the basis; the second slack keeps
        // its row's RHS
        assert_relative_eq!(solution.values()[..], [3.0, 0.0, 5.0]);
    }

    #[test]
    fn solution_length_counts_all_variables() {
        let t = Tableau::augmented(
            &[1.0, 1.0, 1.0],
            &[vec![1.0, 0.0, 0.0], vec![0.0, 1.0, 0.0]],
            &[1.0, 2.0],
        );
        let solution = t.extract_solution(0);
        assert_eq!(solution.values().len(), 5);
        assert_eq!(solution.decision_values().len(), 3);
    }
}
