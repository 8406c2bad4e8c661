//! Read capability trait and storage-free special matrices
//!
//! `MatrixLike` is the read-only capability set shared by every matrix-shaped
//! type in the crate: owned matrices, transpose views, augmented matrices,
//! and the storage-free `ZeroMatrix`/`IdentityMatrix`. Mutation lives only on
//! the owning types, so "unsupported operation" is an absent method rather
//! than a runtime refusal.

use crate::index;
use crate::matrix::Matrix;

/// Read-only access to a matrix-shaped value
///
/// Requires only dimensions and entry lookup; everything else is provided in
/// terms of those. Indices are 1-based, like the rest of the crate.
pub trait MatrixLike {
    /// Number of rows
    fn rows(&self) -> usize;

    /// Number of columns
    fn cols(&self) -> usize;

    /// Entry at 1-based `(r, c)`
    fn entry(&self, r: usize, c: usize) -> f64;

    /// Row `r` as a fresh vector
    fn row_vec(&self, r: usize) -> Vec<f64> {
        (1..=self.cols()).map(|c| self.entry(r, c)).collect()
    }

    /// Column `c` as a fresh vector
    fn column_vec(&self, c: usize) -> Vec<f64> {
        (1..=self.rows()).map(|r| self.entry(r, c)).collect()
    }

    /// Entries on the main diagonal, starting at `(1, 1)`
    fn main_diagonal_vec(&self) -> Vec<f64> {
        let n = self.rows().min(self.cols());
        (1..=n).map(|i| self.entry(i, i)).collect()
    }

    /// Visit every entry as `(value, row, column, offset)` in row-major order
    fn for_each<F: FnMut(f64, usize, usize, usize)>(&self, mut visit: F) {
        let cols = self.cols();
        for r in 1..=self.rows() {
            for c in 1..=cols {
                visit(self.entry(r, c), r, c, index::offset(r, c, cols));
            }
        }
    }

    /// Materialize as an owned [`Matrix`]
    fn to_matrix(&self) -> Matrix {
        let (rows, cols) = (self.rows(), self.cols());
        let mut data = Vec::with_capacity(rows * cols);
        for r in 1..=rows {
            for c in 1..=cols {
                data.push(self.entry(r, c));
            }
        }
        Matrix::from_vec(rows, cols, data)
    }
}

impl MatrixLike for Matrix {
    fn rows(&self) -> usize {
        Matrix::rows(self)
    }

    fn cols(&self) -> usize {
        Matrix::cols(self)
    }

    fn entry(&self, r: usize, c: usize) -> f64 {
        Matrix::entry(self, r, c)
    }

    fn to_matrix(&self) -> Matrix {
        self.clone()
    }
}

impl MatrixLike for super::Transpose<'_> {
    fn rows(&self) -> usize {
        super::Transpose::rows(self)
    }

    fn cols(&self) -> usize {
        super::Transpose::cols(self)
    }

    fn entry(&self, r: usize, c: usize) -> f64 {
        super::Transpose::entry(self, r, c)
    }

    fn to_matrix(&self) -> Matrix {
        self.materialize()
    }
}

/// All-zero matrix without a backing buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroMatrix {
    rows: usize,
    cols: usize,
}

impl ZeroMatrix {
    /// Create a zero matrix of the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Rank of a zero matrix is always zero
    pub fn rank(&self) -> usize {
        0
    }
}

impl MatrixLike for ZeroMatrix {
    fn rows(&self) -> usize {
        self.rows
    }

    fn cols(&self) -> usize {
        self.cols
    }

    fn entry(&self, _r: usize, _c: usize) -> f64 {
        0.0
    }
}

/// Identity matrix without a backing buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityMatrix {
    size: usize,
}

impl IdentityMatrix {
    /// Create an identity matrix of the given size
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Side length of the matrix
    pub fn size(&self) -> usize {
        self.size
    }

    /// Rank of an identity matrix is its size
    pub fn rank(&self) -> usize {
        self.size
    }
}

impl MatrixLike for IdentityMatrix {
    fn rows(&self) -> usize {
        self.size
    }

    fn cols(&self) -> usize {
        self.size
    }

    fn entry(&self, r: usize, c: usize) -> f64 {
        if r == c {
            1.0
        } else {
            0.0
        }
    }
}
