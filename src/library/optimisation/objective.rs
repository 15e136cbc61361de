//! # Objective
//!
//! $$
//! f(x) = \tfrac12 x^\top P x + q^\top x
//! $$
//!

use super::coefficient::Coefficient;
use super::coefficient::CoefficientSequence;
use crate::utilities::Sequence;
use crate::utilities::SymmetricMatrix;

/// Linear term `q` of the objective.
pub type LinearCoefficients = CoefficientSequence;

/// Quadratic term `P` of the objective, `n x n` and symmetric.
pub type QuadraticCoefficients = SymmetricMatrix<Coefficient>;

impl Sequence<Coefficient> {
  /// Number of unknowns weighted by this linear term.
  pub fn n(&self) -> usize {
    self.len()
  }
}

#[cfg(test)]
mod tests {
  use super::LinearCoefficients;
  use super::QuadraticCoefficients;

  #[test]
  fn n_is_the_number_of_unknowns() {
    assert_eq!(LinearCoefficients::from_floats([1.0, 2.0, 3.0]).unwrap().n(), 3);
    let q = QuadraticCoefficients::from_floats([vec![2.0, 0.5], vec![0.5, 1.0]]).unwrap();
    assert_eq!(q.n(), 2);
    assert_eq!(QuadraticCoefficients::empty().n(), 0);
  }

  #[test]
  fn quadratic_term_must_be_symmetric() {
    let err = QuadraticCoefficients::from_floats([vec![2.0, 0.5], vec![0.4, 1.0]]).unwrap_err();
    assert!(err.message().contains("symmetric"));
  }
}
