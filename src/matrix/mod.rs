//! Matrix types, operations, and utilities
//!
//! The dense [`Matrix`] core lives here, split by concern: storage and
//! accessors in `base`, elementary row operations in `rowops`, scalar and
//! matrix arithmetic in `arith`, transposition in `transpose`, and the
//! read-capability trait with the storage-free specializations in `special`.
//! The reduction engine (`reduce`, echelon predicates, `rank`) extends
//! [`Matrix`] from a sibling module.

mod arith;
mod base;
mod rowops;
mod special;
mod transpose;

pub use base::Matrix;
pub use special::{IdentityMatrix, MatrixLike, ZeroMatrix};
pub use transpose::Transpose;
