//! Single linear equations

use crate::error::{Error, Result};
use std::fmt;

/// A linear equation: coefficients (one per variable, left to right) plus a
/// constant term
///
/// The flat layout `[coefficients..., constant]` produced by
/// [`LinearEquation::to_array`] is exactly one row of a system's augmented
/// matrix.
///
/// # Example
///
/// ```
/// use linr::equations::LinearEquation;
///
/// // 2x + 3y = 5
/// let eq = LinearEquation::new(vec![2.0, 3.0], 5.0);
/// assert_eq!(eq.num_variables(), 2);
/// assert_eq!(eq.to_array(), vec![2.0, 3.0, 5.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearEquation {
    coefficients: Vec<f64>,
    constant: f64,
}

impl LinearEquation {
    /// Create an equation from its coefficients and constant term
    pub fn new(coefficients: Vec<f64>, constant: f64) -> Self {
        Self {
            coefficients,
            constant,
        }
    }

    /// Create an equation from the flat `[coefficients..., constant]` layout
    ///
    /// Returns [`Error::EmptyEquation`] unless the slice holds at least one
    /// coefficient and the constant.
    pub fn from_array(values: &[f64]) -> Result<Self> {
        let Some((&constant, coefficients)) = values.split_last() else {
            return Err(Error::EmptyEquation);
        };
        if coefficients.is_empty() {
            return Err(Error::EmptyEquation);
        }
        Ok(Self::new(coefficients.to_vec(), constant))
    }

    /// Number of variables (the coefficient count)
    #[inline]
    pub fn num_variables(&self) -> usize {
        self.coefficients.len()
    }

    /// Coefficient of the 1-based variable `i`
    #[inline]
    pub fn coefficient(&self, i: usize) -> f64 {
        self.coefficients[i - 1]
    }

    /// All coefficients, left to right
    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// The constant term
    #[inline]
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Add another equation: coefficients entrywise, constants together
    ///
    /// Returns [`Error::VariableCountMismatch`] (receiver unchanged) unless
    /// the variable counts agree.
    pub fn add(&mut self, other: &LinearEquation) -> Result<&mut Self> {
        self.check_variables(other)?;
        for (c, o) in self.coefficients.iter_mut().zip(&other.coefficients) {
            *c += o;
        }
        self.constant += other.constant;
        Ok(self)
    }

    /// Subtract another equation
    pub fn sub(&mut self, other: &LinearEquation) -> Result<&mut Self> {
        self.check_variables(other)?;
        for (c, o) in self.coefficients.iter_mut().zip(&other.coefficients) {
            *c -= o;
        }
        self.constant -= other.constant;
        Ok(self)
    }

    /// Scale coefficients and constant uniformly by `k`
    pub fn scale(&mut self, k: f64) -> &mut Self {
        for c in &mut self.coefficients {
            *c *= k;
        }
        self.constant *= k;
        self
    }

    /// Negate both sides
    pub fn negate(&mut self) -> &mut Self {
        self.scale(-1.0)
    }

    /// Flat layout: `[coefficients..., constant]`
    pub fn to_array(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.coefficients.len() + 1);
        out.extend_from_slice(&self.coefficients);
        out.push(self.constant);
        out
    }

    fn check_variables(&self, other: &LinearEquation) -> Result<()> {
        if self.num_variables() != other.num_variables() {
            return Err(Error::VariableCountMismatch {
                expected: self.num_variables(),
                got: other.num_variables(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for LinearEquation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.coefficients.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{c}·x{}", i + 1)?;
        }
        write!(f, " = {}", self.constant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_roundtrip() {
        let eq = LinearEquation::new(vec![2.0, 3.0], 5.0);
        let arr = eq.to_array();
        assert_eq!(arr, vec![2.0, 3.0, 5.0]);
        assert_eq!(LinearEquation::from_array(&arr).unwrap(), eq);
    }

    #[test]
    fn test_from_array_too_short() {
        assert_eq!(
            LinearEquation::from_array(&[]).unwrap_err(),
            Error::EmptyEquation
        );
        assert_eq!(
            LinearEquation::from_array(&[1.0]).unwrap_err(),
            Error::EmptyEquation
        );
    }

    #[test]
    fn test_add_sub() {
        let mut a = LinearEquation::new(vec![1.0, 2.0], 3.0);
        let b = LinearEquation::new(vec![4.0, 5.0], 6.0);
        a.add(&b).unwrap();
        assert_eq!(a, LinearEquation::new(vec![5.0, 7.0], 9.0));
        a.sub(&b).unwrap();
        assert_eq!(a, LinearEquation::new(vec![1.0, 2.0], 3.0));
    }

    #[test]
    fn test_variable_mismatch_leaves_receiver_unchanged() {
        let mut a = LinearEquation::new(vec![1.0, 2.0], 3.0);
        let before = a.clone();
        let b = LinearEquation::new(vec![1.0], 1.0);
        assert_eq!(
            a.add(&b).unwrap_err(),
            Error::VariableCountMismatch {
                expected: 2,
                got: 1
            }
        );
        assert_eq!(a.sub(&b).unwrap_err(), a.add(&b).unwrap_err());
        assert_eq!(a, before);
    }

    #[test]
    fn test_scale_and_negate() {
        let mut eq = LinearEquation::new(vec![1.0, -2.0], 4.0);
        eq.scale(2.0);
        assert_eq!(eq, LinearEquation::new(vec![2.0, -4.0], 8.0));
        eq.negate();
        assert_eq!(eq, LinearEquation::new(vec![-2.0, 4.0], -8.0));
    }

    #[test]
    fn test_coefficient_access() {
        let eq = LinearEquation::new(vec![7.0, 8.0, 9.0], 1.0);
        assert_eq!(eq.coefficient(1), 7.0);
        assert_eq!(eq.coefficient(3), 9.0);
        assert_eq!(eq.constant(), 1.0);
    }

    #[test]
    fn test_display() {
        let eq = LinearEquation::new(vec![2.0, 3.0], 5.0);
        assert_eq!(format!("{eq}"), "2·x1 + 3·x2 = 5");
    }
}
