//! Elementary row operations
//!
//! The three invertible operations of Gaussian elimination: row interchange,
//! row scaling by a nonzero factor, and adding a multiple of one row to
//! another. The public methods validate and return `Result` for chaining;
//! the crate-internal `*_unchecked` variants skip validation for use inside
//! the reduction engine, where indices are valid by construction.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

impl Matrix {
    /// Swap rows `r` and `s`, in place
    ///
    /// # Example
    /// ```
    /// use linr::matrix::Matrix;
    /// let mut m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// m.interchange_rows(1, 2).unwrap();
    /// assert_eq!(m, Matrix::from_rows([[4.0, 5.0, 6.0], [1.0, 2.0, 3.0]]));
    /// ```
    pub fn interchange_rows(&mut self, r: usize, s: usize) -> Result<&mut Self> {
        self.check_row(r)?;
        self.check_row(s)?;
        self.interchange_rows_unchecked(r, s);
        Ok(self)
    }

    /// Multiply every entry of row `r` by `k`, in place
    ///
    /// `k == 0` is rejected with [`Error::SingularScalar`]: zeroing a row is
    /// not invertible, so it is not an elementary row operation. The receiver
    /// is unchanged on error.
    pub fn scale_row(&mut self, r: usize, k: f64) -> Result<&mut Self> {
        self.check_row(r)?;
        if k == 0.0 {
            return Err(Error::SingularScalar { row: r });
        }
        self.scale_row_unchecked(r, k);
        Ok(self)
    }

    /// Add `k` times row `s` to row `r`, in place
    pub fn add_scaled_row(&mut self, r: usize, s: usize, k: f64) -> Result<&mut Self> {
        self.check_row(r)?;
        self.check_row(s)?;
        self.add_scaled_row_unchecked(r, s, k);
        Ok(self)
    }

    /// Add row `s` to row `r`, in place
    pub fn add_row(&mut self, r: usize, s: usize) -> Result<&mut Self> {
        self.add_scaled_row(r, s, 1.0)
    }

    fn check_row(&self, r: usize) -> Result<()> {
        if r < 1 || r > self.rows {
            return Err(Error::invalid_row(r, self.rows));
        }
        Ok(())
    }

    pub(crate) fn interchange_rows_unchecked(&mut self, r: usize, s: usize) {
        if r == s {
            return;
        }
        let (lo, hi) = (r.min(s), r.max(s));
        let (head, tail) = self.data.split_at_mut((hi - 1) * self.cols);
        head[(lo - 1) * self.cols..lo * self.cols].swap_with_slice(&mut tail[..self.cols]);
    }

    pub(crate) fn scale_row_unchecked(&mut self, r: usize, k: f64) {
        for v in self.row_mut(r) {
            *v *= k;
        }
    }

    pub(crate) fn add_scaled_row_unchecked(&mut self, r: usize, s: usize, k: f64) {
        for c in 1..=self.cols {
            let add = k * self.entry(s, c);
            let v = self.entry(r, c);
            self.set(r, c, v + add);
        }
    }
}
