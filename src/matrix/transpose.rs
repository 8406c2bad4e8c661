//! Transposition: in-place permutation and the lazy `Transpose` view

use crate::index;
use crate::matrix::Matrix;

impl Matrix {
    /// Transpose in place, swapping `rows` and `cols`
    ///
    /// Uses the Cate & Twigg permutation (see [`crate::index::transposed_offset`])
    /// to move entries along cycles inside the existing buffer instead of
    /// building an intermediate two-dimensional structure.
    ///
    /// # Example
    /// ```
    /// use linr::matrix::Matrix;
    /// let mut m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// m.transpose();
    /// assert_eq!(*m.transpose(), Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]));
    /// ```
    pub fn transpose(&mut self) -> &mut Self {
        let len = self.data.len();
        // A single row or column is already stored in transposed order.
        if self.rows > 1 && self.cols > 1 {
            let mut moved = vec![false; len];
            for start in 1..len - 1 {
                if moved[start] {
                    continue;
                }
                let mut carried = self.data[start];
                let mut i = start;
                loop {
                    let dest = index::transposed_offset(i, self.rows, len);
                    let displaced = self.data[dest];
                    self.data[dest] = carried;
                    moved[dest] = true;
                    carried = displaced;
                    i = dest;
                    if i == start {
                        break;
                    }
                }
            }
        }
        std::mem::swap(&mut self.rows, &mut self.cols);
        self
    }

    /// Lazy transpose view of this matrix
    ///
    /// Borrows the matrix without copying; see [`Transpose`].
    pub fn transposed(&self) -> Transpose<'_> {
        Transpose { inner: self }
    }
}

/// Read-only transpose view of a borrowed [`Matrix`]
///
/// All accessors recompute from the referenced matrix on demand through the
/// index permutation; nothing is materialized unless [`Transpose::materialize`]
/// is called explicitly. The borrow keeps the view valid: the underlying
/// matrix cannot be mutated or dropped while the view exists.
///
/// # Example
///
/// ```
/// use linr::matrix::Matrix;
///
/// let m = Matrix::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
/// let t = m.transposed();
/// assert_eq!((t.rows(), t.cols()), (3, 2));
/// assert_eq!(t.entry(3, 1), 3.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transpose<'a> {
    inner: &'a Matrix,
}

impl<'a> Transpose<'a> {
    /// Number of rows (the underlying matrix's column count)
    #[inline]
    pub fn rows(&self) -> usize {
        self.inner.cols()
    }

    /// Number of columns (the underlying matrix's row count)
    #[inline]
    pub fn cols(&self) -> usize {
        self.inner.rows()
    }

    /// Total number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the view has zero entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Entry at 1-based `(r, c)` of the transpose
    #[inline]
    pub fn entry(&self, r: usize, c: usize) -> f64 {
        self.inner.entry(c, r)
    }

    /// Row `r` of the transpose (column `r` of the underlying matrix)
    pub fn row(&self, r: usize) -> Vec<f64> {
        self.inner.column(r)
    }

    /// Column `c` of the transpose (row `c` of the underlying matrix)
    pub fn column(&self, c: usize) -> Vec<f64> {
        self.inner.row(c).to_vec()
    }

    /// Iterate over `(row, column, value)` in the transpose's row-major order
    ///
    /// Reads the underlying buffer through the inverse Cate & Twigg
    /// permutation, so no intermediate storage is allocated.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + 'a {
        let cols = self.cols();
        let src_cols = self.inner.cols();
        let data = self.inner.as_slice();
        let len = data.len();
        (0..len).map(move |o| {
            let src = index::transposed_offset(o, src_cols, len);
            (index::row_of(o, cols), index::col_of(o, cols), data[src])
        })
    }

    /// Materialize the transpose as an owned [`Matrix`] snapshot
    ///
    /// The snapshot is an independent value; it does not track later
    /// mutations of the underlying matrix.
    pub fn materialize(&self) -> Matrix {
        let mut copy = self.inner.clone();
        copy.transpose();
        copy
    }
}
