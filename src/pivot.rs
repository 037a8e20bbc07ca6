//! Pivot selection and the Gauss-Jordan pivot step.
//!
//! Entering variable: most negative reduced cost, lowest index on ties.
//! Leaving variable: minimum-ratio test over non-negative ratios, lowest
//! index on ties. An empty eligible set means the problem is unbounded and
//! is reported as such; it never degrades into a silent return.

use nalgebra::RowDVector;

use crate::error::{Result, SimplexError};
use crate::tableau::Tableau;

impl Tableau {
    /// Choose the entering variable: the column with the most negative
    /// reduced cost. On ties the first (lowest) index wins — the scan uses
    /// strict `<`, so a later equal value never displaces an earlier one.
    ///
    /// Returns `None` when no reduced cost is negative, i.e. the tableau is
    /// already optimal.
    pub(crate) fn entering_column(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for j in 0..self.width() - 1 {
            let cost = self.objective[j];
            if cost < 0.0 && best.is_none_or(|(_, low)| cost < low) {
                best = Some((j, cost));
            }
        }
        best.map(|(j, _)| j)
    }

    /// Choose the leaving variable for entering column `col` by the
    /// minimum-ratio test: for each row, ratio = RHS / column value when the
    /// column value is nonzero; only non-negative ratios are eligible, and
    /// the first row achieving the minimum wins ties.
    ///
    /// # Errors
    ///
    /// [`SimplexError::Unbounded`] when no row yields an eligible ratio: the
    /// entering variable can grow without exhausting any constraint.
    pub(crate) fn leaving_row(&self, col: usize) -> Result<usize> {
        let last = self.width() - 1;
        let mut best: Option<(usize, f64)> = None;
        for i in 0..self.num_constraints() {
            let coeff = self.rows[(i, col)];
            if coeff == 0.0 {
                continue;
            }
            let ratio = self.rows[(i, last)] / coeff;
            if ratio >= 0.0 && best.is_none_or(|(_, low)| ratio < low) {
                best = Some((i, ratio));
            }
        }
        best.map(|(i, _)| i).ok_or(SimplexError::Unbounded)
    }

    /// Gauss-Jordan step: make column `col` a unit column with its 1 at
    /// `row`.
    ///
    /// The pivot row is normalized first and snapshotted; every other row
    /// and the objective row are then eliminated against the snapshot. The
    /// pivot value is nonzero by construction of [`Tableau::leaving_row`].
    pub(crate) fn pivot(&mut self, row: usize, col: usize) {
        let width = self.width();

        let pivot_value = self.rows[(row, col)];
        for j in 0..width {
            self.rows[(row, j)] /= pivot_value;
        }
        let pivot_row: RowDVector<f64> = self.rows.row(row).into_owned();

        for i in 0..self.num_constraints() {
            if i == row {
                continue;
            }
            let mul = self.rows[(i, col)];
            for j in 0..width {
                self.rows[(i, j)] -= mul * pivot_row[j];
            }
        }

        let mul = self.objective[col];
        for j in 0..width {
            self.objective[j] -= mul * pivot_row[j];
        }

        // col enters the basis at row, displacing the previous occupant
        self.basis[row] = col;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> Tableau {
        Tableau::augmented(
            &[-30.0, -60.0, -120.0],
            &[
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
                vec![1.0, 2.0, 3.0],
            ],
            &[100.0, 25.0, 10.0, 150.0],
        )
    }

    #[test]
    fn entering_column_most_negative() {
        let t = sample();
        assert_eq!(t.entering_column(), Some(2));
    }

    #[test]
    fn entering_column_tie_breaks_to_first_index() {
        let t = Tableau::augmented(
            &[-5.0, -7.0, -7.0, -2.0],
            &[vec![1.0, 1.0, 1.0, 1.0]],
            &[10.0],
        );
        for _ in 0..10 {
            assert_eq!(t.entering_column(), Some(1));
        }
    }

    #[test]
    fn entering_column_none_when_optimal() {
        let t = Tableau::augmented(&[3.0, 0.0, 1.0], &[vec![1.0, 1.0, 1.0]], &[4.0]);
        assert_eq!(t.entering_column(), None);
        assert!(t.is_optimal());
    }

    #[test]
    fn leaving_row_minimum_ratio() {
        let t = sample();
        // column 2 ratios: inf, inf, 10/1, 150/3 = 50 -> row 2
        assert_eq!(t.leaving_row(2), Ok(2));
    }

    #[test]
    fn leaving_row_skips_zero_and_negative_ratios() {
        let t = Tableau::augmented(
            &[-1.0],
            &[vec![0.0], vec![-2.0], vec![4.0]],
            &[5.0, 6.0, 8.0],
        );
        // row 0: zero coefficient, row 1: ratio -3 (ineligible), row 2: ratio 2
        assert_eq!(t.leaving_row(0), Ok(2));
    }

    #[test]
    fn leaving_row_tie_breaks_to_first_index() {
        let t = Tableau::augmented(
            &[-1.0],
            &[vec![2.0], vec![4.0], vec![1.0]],
            &[6.0, 12.0, 3.0],
        );
        // all three ratios equal 3
        assert_eq!(t.leaving_row(0), Ok(0));
    }

    #[test]
    fn leaving_row_unbounded_when_no_eligible_ratio() {
        let t = Tableau::augmented(&[-1.0], &[vec![-1.0], vec![0.0]], &[10.0, 5.0]);
        assert_eq!(t.leaving_row(0), Err(SimplexError::Unbounded));
    }

    #[test]
    fn pivot_column_becomes_unit() {
        let mut t = sample();
        t.pivot(2, 2);
        for i in 0..t.num_constraints() {
            let expected = if i == 2 { 1.0 } else { 0.0 };
            assert_relative_eq!(t.rows[(i, 2)], expected);
        }
        assert_relative_eq!(t.objective[2], 0.0);
    }

    #[test]
    fn pivot_records_the_entering_column_in_the_basis() {
        let mut t = sample();
        assert_eq!(t.basis, vec![3, 4, 5, 6]);
        t.pivot(2, 2);
        assert_eq!(t.basis, vec![3, 4, 2, 6]);
    }

    #[test]
    fn pivot_normalizes_by_pivot_value() {
        let mut t = Tableau::augmented(
            &[-3.0, -2.0],
            &[vec![2.0, 4.0], vec![1.0, 1.0]],
            &[8.0, 3.0],
        );
        t.pivot(0, 0);
        assert_relative_eq!(t.rows[(0, 0)], 1.0);
        assert_relative_eq!(t.rows[(0, 1)], 2.0);
        let last = t.width() - 1;
        assert_relative_eq!(t.rows[(0, last)], 4.0);
        // row 1 eliminated: [1,1,..,3] - 1*[1,2,..,4]
        assert_relative_eq!(t.rows[(1, 0)], 0.0);
        assert_relative_eq!(t.rows[(1, 1)], -1.0);
        assert_relative_eq!(t.rows[(1, last)], -1.0);
        // objective eliminated with multiplier -3
        assert_relative_eq!(t.objective[0], 0.0);
        assert_relative_eq!(t.objective[1], 4.0);
        assert_relative_eq!(t.objective[last], 12.0);
    }
}
