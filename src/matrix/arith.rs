//! Scalar and matrix arithmetic
//!
//! Scalar operations are infallible and apply uniformly to every entry.
//! Matrix-matrix operations validate dimensions first and leave the receiver
//! untouched on mismatch, so an error never corrupts the operand.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

impl Matrix {
    /// Multiply every entry by `k`, in place
    pub fn scale(&mut self, k: f64) -> &mut Self {
        for v in &mut self.data {
            *v *= k;
        }
        self
    }

    /// Negate every entry, in place
    pub fn negate(&mut self) -> &mut Self {
        self.scale(-1.0)
    }

    /// Add `k` to every entry, in place
    pub fn add_scalar(&mut self, k: f64) -> &mut Self {
        for v in &mut self.data {
            *v += k;
        }
        self
    }

    /// Subtract `k` from every entry, in place
    pub fn sub_scalar(&mut self, k: f64) -> &mut Self {
        self.add_scalar(-k)
    }

    /// Entrywise addition: `self += other`, in place
    ///
    /// Returns [`Error::DimensionMismatch`] (receiver unchanged) unless both
    /// matrices have identical dimensions.
    pub fn add(&mut self, other: &Matrix) -> Result<&mut Self> {
        self.check_same_shape("add", other)?;
        for (v, o) in self.data.iter_mut().zip(&other.data) {
            *v += o;
        }
        Ok(self)
    }

    /// Entrywise subtraction: `self -= other`, in place
    pub fn sub(&mut self, other: &Matrix) -> Result<&mut Self> {
        self.check_same_shape("sub", other)?;
        for (v, o) in self.data.iter_mut().zip(&other.data) {
            *v -= o;
        }
        Ok(self)
    }

    /// Matrix product, post-multiplying in place: `self = self * other`
    ///
    /// Requires `self.cols() == other.rows()`; the receiver takes the shape
    /// `(self.rows(), other.cols())`. Returns [`Error::DimensionMismatch`]
    /// (receiver unchanged) otherwise.
    ///
    /// # Example
    /// ```
    /// use linr::matrix::Matrix;
    /// let mut a = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// let b = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
    /// a.multiply(&b).unwrap();
    /// assert_eq!(a, Matrix::from_rows([[22.0, 28.0], [49.0, 64.0]]));
    /// ```
    pub fn multiply(&mut self, other: &Matrix) -> Result<&mut Self> {
        if self.cols != other.rows {
            return Err(Error::dimension_mismatch(
                "multiply",
                (self.rows, self.cols),
                (other.rows, other.cols),
            ));
        }
        let product = product_data(self, other);
        *self = Matrix::from_vec(self.rows, other.cols, product);
        Ok(self)
    }

    /// Matrix product, pre-multiplying in place: `self = other * self`
    ///
    /// Requires `other.cols() == self.rows()`; the receiver takes the shape
    /// `(other.rows(), self.cols())`.
    pub fn premultiply(&mut self, other: &Matrix) -> Result<&mut Self> {
        if other.cols != self.rows {
            return Err(Error::dimension_mismatch(
                "premultiply",
                (self.rows, self.cols),
                (other.rows, other.cols),
            ));
        }
        let product = product_data(other, self);
        *self = Matrix::from_vec(other.rows, self.cols, product);
        Ok(self)
    }

    fn check_same_shape(&self, op: &'static str, other: &Matrix) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::dimension_mismatch(
                op,
                (self.rows, self.cols),
                (other.rows, other.cols),
            ));
        }
        Ok(())
    }
}

/// Row-major product buffer of `a * b`; dimensions already validated.
fn product_data(a: &Matrix, b: &Matrix) -> Vec<f64> {
    let (m, k, n) = (a.rows, a.cols, b.cols);
    let mut out = vec![0.0; m * n];
    for i in 0..m {
        for l in 0..k {
            let av = a.data[i * k + l];
            if av == 0.0 {
                continue;
            }
            for j in 0..n {
                out[i * n + j] += av * b.data[l * n + j];
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_ops() {
        let mut m = Matrix::from_rows([[1.0, -2.0], [3.0, 4.0]]);
        m.scale(2.0);
        assert_eq!(m, Matrix::from_rows([[2.0, -4.0], [6.0, 8.0]]));
        m.add_scalar(1.0);
        assert_eq!(m, Matrix::from_rows([[3.0, -3.0], [7.0, 9.0]]));
        m.sub_scalar(1.0).negate();
        assert_eq!(m, Matrix::from_rows([[-2.0, 4.0], [-6.0, -8.0]]));
    }

    #[test]
    fn test_add_sub() {
        let mut a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from_rows([[10.0, 20.0], [30.0, 40.0]]);
        a.add(&b).unwrap();
        assert_eq!(a, Matrix::from_rows([[11.0, 22.0], [33.0, 44.0]]));
        a.sub(&b).unwrap();
        assert_eq!(a, Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]));
    }

    #[test]
    fn test_add_mismatch_leaves_receiver_unchanged() {
        let mut a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let before = a.clone();
        let b = Matrix::from_rows([[1.0, 2.0, 3.0]]);
        assert_eq!(
            a.add(&b).unwrap_err(),
            Error::dimension_mismatch("add", (2, 2), (1, 3))
        );
        assert_eq!(a, before);
    }

    #[test]
    fn test_multiply_2x3_by_3x2() {
        let mut a = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        a.multiply(&b).unwrap();
        assert_eq!((a.rows(), a.cols()), (2, 2));
        assert_eq!(a, Matrix::from_rows([[22.0, 28.0], [49.0, 64.0]]));
    }

    #[test]
    fn test_premultiply() {
        let a = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let mut b = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        b.premultiply(&a).unwrap();
        assert_eq!(b, Matrix::from_rows([[22.0, 28.0], [49.0, 64.0]]));
    }

    #[test]
    fn test_multiply_mismatch_no_mutation() {
        let mut a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let before = a.clone();
        let b = Matrix::from_rows([[1.0, 2.0, 3.0]]);
        assert!(a.multiply(&b).is_err());
        assert!(a.premultiply(&b).is_err());
        assert_eq!(a, before);
    }

    #[test]
    fn test_multiply_by_identity() {
        let mut a = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let before = a.clone();
        a.multiply(&Matrix::identity(2)).unwrap();
        assert_eq!(a, before);
        a.premultiply(&Matrix::identity(2)).unwrap();
        assert_eq!(a, before);
    }
}
