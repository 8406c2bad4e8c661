//! Augmented matrices: a column-split matrix for system solving
//!
//! An [`AugmentedMatrix`] is the row-wise concatenation of a left and a right
//! matrix with equal row counts. It remembers the split point and exposes
//! only the operations that preserve the split's meaning: row operations and
//! reduction. Shape-changing operations (transpose, add, sub, multiply) are
//! not methods of this type at all, so misuse is a compile error rather than
//! a runtime refusal.

use crate::error::{Error, Result};
use crate::matrix::{Matrix, MatrixLike};

/// Row-wise concatenation of two matrices with a remembered column split
///
/// # Example
///
/// ```
/// use linr::augmented::AugmentedMatrix;
/// use linr::matrix::Matrix;
///
/// let a = Matrix::from_rows([[1.0, 1.0], [1.0, -1.0]]);
/// let b = Matrix::from_rows([[3.0], [1.0]]);
/// let mut aug = AugmentedMatrix::new(&a, &b).unwrap();
/// aug.reduce(true);
/// assert_eq!(aug.right(), Matrix::from_rows([[2.0], [1.0]]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    inner: Matrix,
    left_width: usize,
    right_width: usize,
}

impl AugmentedMatrix {
    /// Concatenate `left` and `right` row by row
    ///
    /// Returns [`Error::DimensionMismatch`] unless the row counts agree.
    pub fn new(left: &Matrix, right: &Matrix) -> Result<Self> {
        if left.rows() != right.rows() {
            return Err(Error::dimension_mismatch(
                "augment",
                (left.rows(), left.cols()),
                (right.rows(), right.cols()),
            ));
        }
        let rows = left.rows();
        let cols = left.cols() + right.cols();
        let mut data = Vec::with_capacity(rows * cols);
        for r in 1..=rows {
            data.extend_from_slice(left.row(r));
            data.extend_from_slice(right.row(r));
        }
        Ok(Self {
            inner: Matrix::from_vec(rows, cols, data),
            left_width: left.cols(),
            right_width: right.cols(),
        })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    /// Total number of columns (left width + right width)
    #[inline]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    /// Column count of the left part
    #[inline]
    pub fn left_width(&self) -> usize {
        self.left_width
    }

    /// Column count of the right part
    #[inline]
    pub fn right_width(&self) -> usize {
        self.right_width
    }

    /// Entry at 1-based `(r, c)` across the whole concatenation
    #[inline]
    pub fn entry(&self, r: usize, c: usize) -> f64 {
        self.inner.entry(r, c)
    }

    /// Row `r` across the whole concatenation
    #[inline]
    pub fn row(&self, r: usize) -> &[f64] {
        self.inner.row(r)
    }

    /// Column `c` as a fresh vector
    pub fn column(&self, c: usize) -> Vec<f64> {
        self.inner.column(c)
    }

    /// Read-only view of the whole concatenation as a [`Matrix`]
    #[inline]
    pub fn as_matrix(&self) -> &Matrix {
        &self.inner
    }

    /// Fresh copy of the left part
    ///
    /// A copy, never an alias: mutating the result does not touch this
    /// augmented matrix.
    pub fn left(&self) -> Matrix {
        self.split_part(0, self.left_width)
    }

    /// Fresh copy of the right part
    pub fn right(&self) -> Matrix {
        self.split_part(self.left_width, self.right_width)
    }

    fn split_part(&self, skip: usize, width: usize) -> Matrix {
        let mut data = Vec::with_capacity(self.rows() * width);
        for r in 1..=self.rows() {
            data.extend_from_slice(&self.inner.row(r)[skip..skip + width]);
        }
        Matrix::from_vec(self.rows(), width, data)
    }

    /// Swap rows `r` and `s`, in place
    pub fn interchange_rows(&mut self, r: usize, s: usize) -> Result<&mut Self> {
        self.inner.interchange_rows(r, s)?;
        Ok(self)
    }

    /// Multiply every entry of row `r` by a nonzero `k`, in place
    pub fn scale_row(&mut self, r: usize, k: f64) -> Result<&mut Self> {
        self.inner.scale_row(r, k)?;
        Ok(self)
    }

    /// Add `k` times row `s` to row `r`, in place
    pub fn add_scaled_row(&mut self, r: usize, s: usize, k: f64) -> Result<&mut Self> {
        self.inner.add_scaled_row(r, s, k)?;
        Ok(self)
    }

    /// Reduce in place to row-echelon form (or reduced row-echelon form when
    /// `canonical` is true), across the whole concatenation
    ///
    /// Row operations act on full concatenated rows, which is exactly how an
    /// augmented matrix solves its system.
    pub fn reduce(&mut self, canonical: bool) -> &mut Self {
        self.inner.reduce(canonical);
        self
    }

    /// Rank of the whole concatenation
    pub fn rank(&self) -> usize {
        self.inner.rank()
    }
}

impl MatrixLike for AugmentedMatrix {
    fn rows(&self) -> usize {
        AugmentedMatrix::rows(self)
    }

    fn cols(&self) -> usize {
        AugmentedMatrix::cols(self)
    }

    fn entry(&self, r: usize, c: usize) -> f64 {
        AugmentedMatrix::entry(self, r, c)
    }

    fn to_matrix(&self) -> Matrix {
        self.inner.clone()
    }
}
