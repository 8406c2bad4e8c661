//! Index arithmetic for row-major storage
//!
//! Coordinates are 1-based at the API surface and 0-based in storage.
//! Every (row, column) ⇄ offset conversion in the crate goes through the
//! functions here, so the storage convention lives in exactly one place.

/// Linear offset of the entry at 1-based `(r, c)` in a row-major buffer
/// with `cols` columns.
///
/// Callers guarantee `1 <= r` and `1 <= c <= cols`; debug builds assert.
///
/// # Example
/// ```
/// use linr::index::offset;
/// assert_eq!(offset(1, 1, 3), 0);
/// assert_eq!(offset(2, 1, 3), 3);
/// assert_eq!(offset(2, 3, 3), 5);
/// ```
#[inline]
pub fn offset(r: usize, c: usize, cols: usize) -> usize {
    debug_assert!(r >= 1, "row index is 1-based");
    debug_assert!(c >= 1 && c <= cols, "column index {c} out of 1..={cols}");
    (r - 1) * cols + (c - 1)
}

/// 1-based row of the entry stored at `offset` in a buffer with `cols` columns.
#[inline]
pub fn row_of(offset: usize, cols: usize) -> usize {
    offset / cols + 1
}

/// 1-based column of the entry stored at `offset` in a buffer with `cols` columns.
#[inline]
pub fn col_of(offset: usize, cols: usize) -> usize {
    offset % cols + 1
}

/// Cate & Twigg (1977) in-place transpose permutation.
///
/// For a source matrix with `rows` rows stored row-major in `len` entries,
/// the element at offset `i` lands at offset `(i * rows) mod (len - 1)` in
/// the row-major layout of the transpose. Offsets `0` and `len - 1` are
/// fixed points.
///
/// The permutation is inverted by calling this function with the source
/// *column* count instead: `rows * cols ≡ 1 (mod len - 1)`.
#[inline]
pub fn transposed_offset(i: usize, rows: usize, len: usize) -> usize {
    if i == len - 1 {
        i
    } else {
        (i * rows) % (len - 1)
    }
}
