//! Linear equations and systems of linear equations
//!
//! A [`LinearEquation`] is coefficients plus a constant; a [`LinearSystem`]
//! collects equations over the same variables and solves them through the
//! augmented-matrix reduction pipeline, classifying the outcome as a
//! [`Solution`].

mod equation;
mod system;

pub use equation::LinearEquation;
pub use system::{LinearSystem, Solution};
