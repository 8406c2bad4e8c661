//! Error types for linr

use thiserror::Error;

/// Result type alias using linr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in linr operations
///
/// Every variant is a locally recoverable condition: the operation that
/// produced it leaves its receiver unchanged, so callers can branch and
/// retry deterministically.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Operand dimensions are incompatible for an operation
    #[error("dimension mismatch in '{op}': {lhs_rows}x{lhs_cols} vs {rhs_rows}x{rhs_cols}")]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Receiver row count
        lhs_rows: usize,
        /// Receiver column count
        lhs_cols: usize,
        /// Operand row count
        rhs_rows: usize,
        /// Operand column count
        rhs_cols: usize,
    },

    /// Row operation referenced a row outside `[1, rows]`
    #[error("row index {row} out of bounds for matrix with {rows} rows")]
    InvalidRowIndex {
        /// The invalid 1-based row index
        row: usize,
        /// Number of rows in the matrix
        rows: usize,
    },

    /// Attempt to scale a row by zero
    ///
    /// Scaling by zero is not an elementary row operation (it cannot be
    /// undone), so it is rejected rather than performed.
    #[error("cannot scale row {row} by zero")]
    SingularScalar {
        /// The 1-based row index the caller tried to scale
        row: usize,
    },

    /// Entry buffer length does not match the requested dimensions
    #[error("entry count {got} does not fill a {rows}x{cols} matrix")]
    EntryCountMismatch {
        /// Requested row count
        rows: usize,
        /// Requested column count
        cols: usize,
        /// Length of the supplied buffer
        got: usize,
    },

    /// A square-only operation was invoked on a rectangular matrix
    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Row count of the receiver
        rows: usize,
        /// Column count of the receiver
        cols: usize,
    },

    /// Equation operands have differing variable counts
    #[error("equation has {got} variables, expected {expected}")]
    VariableCountMismatch {
        /// Variable count of the receiver (or system)
        expected: usize,
        /// Variable count of the operand
        got: usize,
    },

    /// An equation was built with no coefficients
    #[error("a linear equation needs at least one coefficient and a constant")]
    EmptyEquation,

    /// A derivation or solve was requested on a system with no equations
    #[error("system contains no equations")]
    EmptySystem,
}

impl Error {
    /// Create a dimension mismatch error from two shapes
    pub fn dimension_mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            op,
            lhs_rows: lhs.0,
            lhs_cols: lhs.1,
            rhs_rows: rhs.0,
            rhs_cols: rhs.1,
        }
    }

    /// Create an invalid row index error
    pub fn invalid_row(row: usize, rows: usize) -> Self {
        Self::InvalidRowIndex { row, rows }
    }
}
