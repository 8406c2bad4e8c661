//! # linr
//!
//! **Dense row-major matrix algebra and linear-system solving.**
//!
//! linr provides a dense [`matrix::Matrix`] over `f64` with elementary row
//! operations, Gaussian and Gauss-Jordan reduction, in-place transposition,
//! and an augmented-matrix pipeline for solving systems of linear equations.
//!
//! ## Features
//!
//! - **Matrices**: row-major storage, 1-based accessors, row/column/diagonal
//!   views, exact equality, deterministic row-major iteration
//! - **Row operations**: interchange, nonzero scaling, add-a-multiple — the
//!   three invertible operations of elimination
//! - **Reduction**: in-place row-echelon and reduced row-echelon form, with
//!   independent form predicates and rank
//! - **Transposition**: in-place via the Cate & Twigg permutation, plus a
//!   lazy borrowing view
//! - **Systems**: [`equations::LinearSystem`] derives coefficient, constant,
//!   and augmented matrices and classifies solutions as unique, inconsistent,
//!   or parametric
//!
//! ## Quick start
//!
//! ```
//! use linr::prelude::*;
//!
//! let mut system = LinearSystem::new();
//! system.push(LinearEquation::new(vec![1.0, 1.0], 3.0))?;
//! system.push(LinearEquation::new(vec![1.0, -1.0], 1.0))?;
//!
//! match system.solve()? {
//!     Solution::Unique(x) => assert_eq!(x.column(1), vec![2.0, 1.0]),
//!     _ => unreachable!(),
//! }
//! # Ok::<(), linr::Error>(())
//! ```
//!
//! ## Error handling
//!
//! Fallible operations return [`Result`]; an error always leaves the
//! receiver unchanged. There are no panicking paths in release builds apart
//! from the documented `from_slice`-style constructor wrappers.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod augmented;
pub mod equations;
pub mod error;
pub mod index;
pub mod matrix;

mod reduce;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::augmented::AugmentedMatrix;
    pub use crate::equations::{LinearEquation, LinearSystem, Solution};
    pub use crate::error::{Error, Result};
    pub use crate::matrix::{IdentityMatrix, Matrix, MatrixLike, Transpose, ZeroMatrix};
}
