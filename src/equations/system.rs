//! Systems of linear equations and their solutions

use super::LinearEquation;
use crate::augmented::AugmentedMatrix;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Outcome of solving a [`LinearSystem`]
///
/// An inconsistent system is a normal outcome, not an error: it is reported
/// as a variant here so callers branch on the value.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// The system has no solution (a reduced row reads `0 = c` with `c != 0`)
    Inconsistent,
    /// Exactly one solution: a column matrix holding each variable's value
    /// in row order
    Unique(Matrix),
    /// Infinitely many solutions; the reduced augmented matrix is returned
    /// so free variables and their relationships can be read off
    Parametric(AugmentedMatrix),
}

/// An ordered collection of [`LinearEquation`]s over the same variables
///
/// The variable count is fixed by the first equation pushed; later pushes
/// with a different count are rejected. The coefficient, constant, and
/// augmented matrices are pure derivations recomputed on every call — they
/// are never cached, so they cannot go stale.
///
/// # Example
///
/// ```
/// use linr::equations::{LinearEquation, LinearSystem, Solution};
///
/// let mut system = LinearSystem::new();
/// system.push(LinearEquation::new(vec![1.0, 1.0], 3.0)).unwrap();
/// system.push(LinearEquation::new(vec![1.0, -1.0], 1.0)).unwrap();
///
/// match system.solve().unwrap() {
///     Solution::Unique(x) => assert_eq!(x.column(1), vec![2.0, 1.0]),
///     other => panic!("expected a unique solution, got {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearSystem {
    equations: Vec<LinearEquation>,
}

impl LinearSystem {
    /// Create an empty system
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a system from equations, validating variable counts
    pub fn from_equations<I>(equations: I) -> Result<Self>
    where
        I: IntoIterator<Item = LinearEquation>,
    {
        let mut system = Self::new();
        for eq in equations {
            system.push(eq)?;
        }
        Ok(system)
    }

    /// Append an equation
    ///
    /// Returns [`Error::VariableCountMismatch`] (equation not appended) when
    /// the equation's variable count differs from the system's.
    pub fn push(&mut self, equation: LinearEquation) -> Result<()> {
        if let Some(first) = self.equations.first() {
            if equation.num_variables() != first.num_variables() {
                return Err(Error::VariableCountMismatch {
                    expected: first.num_variables(),
                    got: equation.num_variables(),
                });
            }
        }
        self.equations.push(equation);
        Ok(())
    }

    /// Number of equations
    #[inline]
    pub fn num_equations(&self) -> usize {
        self.equations.len()
    }

    /// Number of variables (zero for an empty system)
    #[inline]
    pub fn num_variables(&self) -> usize {
        self.equations
            .first()
            .map_or(0, LinearEquation::num_variables)
    }

    /// Whether the system holds no equations
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.equations.is_empty()
    }

    /// The equations, in insertion order
    #[inline]
    pub fn equations(&self) -> &[LinearEquation] {
        &self.equations
    }

    /// The coefficient matrix: one row per equation, one column per variable
    ///
    /// Recomputed from the current equations on every call.
    pub fn coefficient_matrix(&self) -> Result<Matrix> {
        self.check_nonempty()?;
        let (rows, cols) = (self.num_equations(), self.num_variables());
        let mut data = Vec::with_capacity(rows * cols);
        for eq in &self.equations {
            data.extend_from_slice(eq.coefficients());
        }
        Ok(Matrix::from_vec(rows, cols, data))
    }

    /// The constant column matrix: one row per equation
    pub fn constant_matrix(&self) -> Result<Matrix> {
        self.check_nonempty()?;
        let data: Vec<f64> = self.equations.iter().map(LinearEquation::constant).collect();
        Ok(Matrix::from_vec(self.num_equations(), 1, data))
    }

    /// The augmented matrix `[coefficients | constants]`
    pub fn augmented_matrix(&self) -> Result<AugmentedMatrix> {
        AugmentedMatrix::new(&self.coefficient_matrix()?, &self.constant_matrix()?)
    }

    /// Solve the system by Gauss-Jordan reduction of its augmented matrix
    ///
    /// Classification follows the ranks of the reduced matrix:
    /// - coefficient rank below full rank: [`Solution::Inconsistent`];
    /// - full rank equal to the variable count: [`Solution::Unique`] with the
    ///   constants column of the reduced augmented matrix;
    /// - otherwise: [`Solution::Parametric`] with the reduced augmented
    ///   matrix itself.
    pub fn solve(&self) -> Result<Solution> {
        let mut augmented = self.augmented_matrix()?;
        augmented.reduce(true);

        let full_rank = augmented.rank();
        let left_rank = augmented.left().rank();

        if left_rank < full_rank {
            Ok(Solution::Inconsistent)
        } else if full_rank == self.num_variables() {
            Ok(Solution::Unique(augmented.right()))
        } else {
            Ok(Solution::Parametric(augmented))
        }
    }

    fn check_nonempty(&self) -> Result<()> {
        if self.equations.is_empty() {
            return Err(Error::EmptySystem);
        }
        Ok(())
    }
}
