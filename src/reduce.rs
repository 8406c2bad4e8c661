//! In-place Gaussian and Gauss-Jordan reduction
//!
//! Row-echelon reduction scans columns left to right, pulling the first row
//! with a nonzero entry at or below the frontier up to the frontier row,
//! normalizing its pivot to 1, and eliminating everything below. Canonical
//! (Gauss-Jordan) reduction then eliminates above each pivot in a second
//! pass, yielding reduced row-echelon form.
//!
//! Reduction is total on finite-entry matrices: pivots are nonzero by
//! construction, so normalization never divides by zero.

use crate::matrix::Matrix;

impl Matrix {
    /// Reduce in place to row-echelon form, or to reduced row-echelon form
    /// when `canonical` is true
    ///
    /// After the call, leading coefficients are exactly 1 and their column
    /// positions strictly increase from top to bottom, with all-zero rows at
    /// the bottom. With `canonical`, each pivot column additionally contains
    /// no other nonzero entry.
    ///
    /// # Example
    /// ```
    /// use linr::matrix::Matrix;
    /// let mut m = Matrix::from_rows([[2.0, 4.0], [1.0, 3.0]]);
    /// m.reduce(true);
    /// assert_eq!(m, Matrix::identity(2));
    /// ```
    pub fn reduce(&mut self, canonical: bool) -> &mut Self {
        let mut pivots: Vec<(usize, usize)> = Vec::new();
        let mut frontier = 1;

        for col in 1..=self.cols() {
            if frontier > self.rows() {
                break;
            }
            let found = (frontier..=self.rows()).find(|&r| self.entry(r, col) != 0.0);
            let Some(pivot_row) = found else {
                continue;
            };
            if pivot_row != frontier {
                self.interchange_rows_unchecked(pivot_row, frontier);
            }

            let lead = self.entry(frontier, col);
            self.scale_row_unchecked(frontier, 1.0 / lead);
            // The pivot must be exactly 1 even when lead * (1/lead) rounds.
            self.set(frontier, col, 1.0);

            for below in frontier + 1..=self.rows() {
                let factor = self.entry(below, col);
                if factor != 0.0 {
                    self.add_scaled_row_unchecked(below, frontier, -factor);
                    self.set(below, col, 0.0);
                }
            }

            pivots.push((frontier, col));
            frontier += 1;
        }

        if canonical {
            for &(pivot_row, pivot_col) in pivots.iter().rev() {
                for above in 1..pivot_row {
                    let factor = self.entry(above, pivot_col);
                    if factor != 0.0 {
                        self.add_scaled_row_unchecked(above, pivot_row, -factor);
                        self.set(above, pivot_col, 0.0);
                    }
                }
            }
        }

        self
    }

    /// Whether the matrix is in row-echelon form
    ///
    /// Checked independently of the reduction algorithm: every nonzero row
    /// leads with exactly 1, leading-coefficient columns strictly increase
    /// from top to bottom, and all-zero rows sit contiguously at the bottom.
    pub fn is_row_echelon(&self) -> bool {
        let mut last_col = 0;
        let mut seen_zero_row = false;
        for r in 1..=self.rows() {
            match self.leading_entry(r) {
                None => seen_zero_row = true,
                Some((col, lead)) => {
                    if seen_zero_row || lead != 1.0 || col <= last_col {
                        return false;
                    }
                    last_col = col;
                }
            }
        }
        true
    }

    /// Whether the matrix is in reduced row-echelon form
    ///
    /// Row-echelon form, plus: each pivot column is zero in every other row.
    pub fn is_reduced_row_echelon(&self) -> bool {
        if !self.is_row_echelon() {
            return false;
        }
        for r in 1..=self.rows() {
            if let Some((col, _)) = self.leading_entry(r) {
                for other in 1..=self.rows() {
                    if other != r && self.entry(other, col) != 0.0 {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Rank: the number of nonzero rows in the row-echelon form
    ///
    /// Computed on a clone; the receiver is not modified.
    ///
    /// # Example
    /// ```
    /// use linr::matrix::Matrix;
    /// let m = Matrix::from_rows([[1.0, 2.0], [2.0, 4.0]]);
    /// assert_eq!(m.rank(), 1);
    /// ```
    pub fn rank(&self) -> usize {
        let mut reduced = self.clone();
        reduced.reduce(false);
        (1..=reduced.rows())
            .take_while(|&r| reduced.leading_entry(r).is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_staircase() {
        let mut m = Matrix::from_rows([
            [0.0, 2.0, 4.0],
            [1.0, 1.0, 1.0],
            [2.0, 2.0, 2.0],
        ]);
        m.reduce(false);
        assert!(m.is_row_echelon());
        assert_eq!(m.entry(1, 1), 1.0);
        // Duplicate direction of row 2 collapses to a zero row at the bottom
        assert_eq!(m.row(3), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_reduce_canonical_clears_pivot_columns() {
        let mut m = Matrix::from_rows([[1.0, 2.0, 3.0], [2.0, 5.0, 3.0], [1.0, 0.0, 8.0]]);
        m.reduce(true);
        assert!(m.is_reduced_row_echelon());
        assert_eq!(m, Matrix::identity(3));
    }

    #[test]
    fn test_reduce_idempotent() {
        let mut m = Matrix::from_rows([[3.0, 6.0], [1.0, 5.0], [2.0, 4.0]]);
        m.reduce(false);
        let echelon = m.clone();
        m.reduce(false);
        assert_eq!(m, echelon);

        m.reduce(true);
        let canonical = m.clone();
        m.reduce(true);
        assert_eq!(m, canonical);
    }

    #[test]
    fn test_zero_matrix_reduction() {
        let mut m = Matrix::zeros(2, 3);
        m.reduce(true);
        assert_eq!(m, Matrix::zeros(2, 3));
        assert!(m.is_reduced_row_echelon());
        assert_eq!(m.rank(), 0);
    }

    #[test]
    fn test_rank_bounds() {
        let m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        assert!(m.rank() <= 2);
        assert_eq!(m.rank(), 2);
        assert_eq!(Matrix::identity(4).rank(), 4);
        assert_eq!(Matrix::zeros(3, 5).rank(), 0);
    }

    #[test]
    fn test_rank_does_not_mutate() {
        let m = Matrix::from_rows([[2.0, 4.0], [1.0, 3.0]]);
        let before = m.clone();
        let _ = m.rank();
        assert_eq!(m, before);
    }

    #[test]
    fn test_echelon_predicate_rejects_gap() {
        // Zero row above a nonzero row violates the staircase
        let m = Matrix::from_rows([[0.0, 0.0], [1.0, 0.0]]);
        assert!(!m.is_row_echelon());
    }

    #[test]
    fn test_echelon_predicate_rejects_non_unit_lead() {
        let m = Matrix::from_rows([[2.0, 0.0], [0.0, 1.0]]);
        assert!(!m.is_row_echelon());
    }

    #[test]
    fn test_echelon_but_not_reduced() {
        let m = Matrix::from_rows([[1.0, 2.0], [0.0, 1.0]]);
        assert!(m.is_row_echelon());
        assert!(!m.is_reduced_row_echelon());
    }

    #[test]
    fn test_reduce_fractional_pivot() {
        let mut m = Matrix::from_rows([[0.5, 1.0], [1.0, 3.0]]);
        m.reduce(true);
        assert_eq!(m, Matrix::identity(2));
    }
}
