//! Core Matrix type

use crate::error::{Error, Result};
use crate::index;
use std::fmt;

/// Dense row-major matrix of `f64` entries
///
/// A `Matrix` owns a flat buffer of `rows * cols` entries stored row by row,
/// left to right. The invariant `data.len() == rows * cols` holds after every
/// operation: dimension fields and buffer are always updated together.
///
/// Row and column indices are 1-based at the API surface, matching the usual
/// mathematical convention; storage is 0-based internally and all conversion
/// goes through [`crate::index`].
///
/// # Example
///
/// ```
/// use linr::matrix::Matrix;
///
/// let mut m = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(m.entry(2, 1), 3.0);
/// m.transpose();
/// assert_eq!(m.entry(1, 2), 3.0);
/// ```
#[derive(Clone, PartialEq)]
pub struct Matrix {
    pub(super) rows: usize,
    pub(super) cols: usize,
    pub(super) data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix filled with zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Create a matrix from a row-major slice of entries
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal `rows * cols`. For a fallible
    /// alternative, use [`Self::try_from_slice`].
    pub fn from_slice(data: &[f64], rows: usize, cols: usize) -> Self {
        Self::try_from_slice(data, rows, cols).expect("Matrix::from_slice failed")
    }

    /// Create a matrix from a row-major slice of entries (fallible version)
    ///
    /// Returns [`Error::EntryCountMismatch`] if `data.len()` does not equal
    /// `rows * cols`.
    pub fn try_from_slice(data: &[f64], rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::EntryCountMismatch {
                rows,
                cols,
                got: data.len(),
            });
        }
        Ok(Self {
            rows,
            cols,
            data: data.to_vec(),
        })
    }

    /// Create a matrix from fixed-size rows
    ///
    /// The row and column counts are inferred from the array dimensions, so
    /// this constructor covers the small fixed-size cases (2×2 through 4×4
    /// and friends) without a separate type per size.
    ///
    /// # Example
    /// ```
    /// use linr::matrix::Matrix;
    /// let m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!((m.rows(), m.cols()), (2, 3));
    /// ```
    pub fn from_rows<const C: usize, const R: usize>(rows: [[f64; C]; R]) -> Self {
        let mut data = Vec::with_capacity(R * C);
        for row in &rows {
            data.extend_from_slice(row);
        }
        Self {
            rows: R,
            cols: C,
            data,
        }
    }

    /// Create a square matrix from a row-major slice of entries
    pub fn square(size: usize, data: &[f64]) -> Result<Self> {
        Self::try_from_slice(data, size, size)
    }

    /// Create an identity matrix of the given size
    pub fn identity(size: usize) -> Self {
        let mut m = Self::zeros(size, size);
        for i in 1..=size {
            m.set(i, i, 1.0);
        }
        m
    }

    /// Assemble a matrix from pre-built row-major storage.
    ///
    /// Internal constructor; callers guarantee `data.len() == rows * cols`.
    pub(crate) fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    /// Overwrite this matrix with the identity, in place
    ///
    /// Returns [`Error::NotSquare`] (receiver unchanged) on a rectangular
    /// matrix.
    pub fn set_identity(&mut self) -> Result<&mut Self> {
        if !self.is_square() {
            return Err(Error::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.data.fill(0.0);
        for i in 1..=self.rows {
            self.set(i, i, 1.0);
        }
        Ok(self)
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the matrix has zero entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the matrix is square
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Entry at 1-based `(r, c)`
    ///
    /// Bounds are the caller's responsibility (debug builds assert); use
    /// [`Self::get`] for a checked lookup.
    #[inline]
    pub fn entry(&self, r: usize, c: usize) -> f64 {
        debug_assert!(r >= 1 && r <= self.rows, "row {r} out of 1..={}", self.rows);
        self.data[index::offset(r, c, self.cols)]
    }

    /// Checked entry lookup at 1-based `(r, c)`
    pub fn get(&self, r: usize, c: usize) -> Option<f64> {
        if r >= 1 && r <= self.rows && c >= 1 && c <= self.cols {
            Some(self.data[index::offset(r, c, self.cols)])
        } else {
            None
        }
    }

    /// Write the entry at 1-based `(r, c)`
    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: f64) {
        debug_assert!(r >= 1 && r <= self.rows, "row {r} out of 1..={}", self.rows);
        self.data[index::offset(r, c, self.cols)] = value;
    }

    /// Row `r` as a contiguous slice (1-based)
    #[inline]
    pub fn row(&self, r: usize) -> &[f64] {
        let start = index::offset(r, 1, self.cols);
        &self.data[start..start + self.cols]
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, r: usize) -> &mut [f64] {
        let start = index::offset(r, 1, self.cols);
        &mut self.data[start..start + self.cols]
    }

    /// Column `c` as a fresh vector (1-based)
    pub fn column(&self, c: usize) -> Vec<f64> {
        (1..=self.rows).map(|r| self.entry(r, c)).collect()
    }

    /// Entries on the main diagonal, starting at `(1, 1)`
    pub fn main_diagonal(&self) -> Vec<f64> {
        self.diagonal(1, 1)
    }

    /// Entries on the diagonal passing through `(r, c)`
    ///
    /// The walk starts where the diagonal meets the top or left edge of the
    /// matrix and continues down-right while both indices stay in bounds.
    pub fn diagonal(&self, r: usize, c: usize) -> Vec<f64> {
        let back = (r - 1).min(c - 1);
        let (mut i, mut j) = (r - back, c - back);
        let mut out = Vec::new();
        while i <= self.rows && j <= self.cols {
            out.push(self.entry(i, j));
            i += 1;
            j += 1;
        }
        out
    }

    /// First nonzero entry of row `r` with its 1-based column, or `None`
    /// for an all-zero row
    pub fn leading_entry(&self, r: usize) -> Option<(usize, f64)> {
        self.row(r)
            .iter()
            .position(|&v| v != 0.0)
            .map(|i| (i + 1, self.row(r)[i]))
    }

    /// First nonzero entry of row `r`, or `None` for an all-zero row
    pub fn leading_coefficient(&self, r: usize) -> Option<f64> {
        self.leading_entry(r).map(|(_, v)| v)
    }

    /// All entries in row-major order
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Iterate over `(row, column, value)` in row-major order
    ///
    /// The enumeration order is part of the contract: rows top to bottom,
    /// columns left to right within each row.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(o, &v)| (index::row_of(o, cols), index::col_of(o, cols), v))
    }

    /// Iterate over rows as slices, top to bottom
    pub fn rows_iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.cols)
    }

    /// Iterate over columns as fresh vectors, left to right
    pub fn columns_iter(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (1..=self.cols).map(move |c| self.column(c))
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Matrix {{ rows: {}, cols: {}, data: {:?} }}",
            self.rows, self.cols, self.data
        )
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
