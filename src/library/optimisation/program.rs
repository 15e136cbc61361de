//! # Quadratic program
//!
//! $$
//! \min_x \tfrac12 x^\top P x + q^\top x \quad \text{s.t.} \quad A_{ub}x \le b_{ub},\ A_{eq}x = b_{eq}
//! $$
//!

use std::fmt::Display;

use super::constraint::LinearConstraints;
use super::objective::LinearCoefficients;
use super::objective::QuadraticCoefficients;
use crate::error::PortanError;
use crate::error::Result;

/// Convex quadratic program over `n` unknowns.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuadraticProgram {
  quadratic: QuadraticCoefficients,
  constraints: LinearConstraints,
  linear: Option<LinearCoefficients>,
}

impl QuadraticProgram {
  /// Fails unless the quadratic term, the constraints and the linear term (when
  /// given) agree on `n`.
  pub fn new(
    quadratic: QuadraticCoefficients,
    constraints: LinearConstraints,
    linear: Option<LinearCoefficients>,
  ) -> Result<Self> {
    let n = quadratic.n();
    let linear_n = linear.as_ref().map(|l| l.n()).unwrap_or(n);
    if constraints.n() != n || linear_n != n {
      return Err(PortanError::validation(format!(
        "cannot instantiate QuadraticProgram; quadratic ({n}), linear ({linear_n}) and constraints ({}) must have the same n",
        constraints.n()
      )));
    }
    Ok(Self {
      quadratic,
      constraints,
      linear,
    })
  }

  /// Number of unknowns.
  pub fn n(&self) -> usize {
    self.quadratic.n()
  }

  pub fn quadratic(&self) -> &QuadraticCoefficients {
    &self.quadratic
  }

  pub fn constraints(&self) -> &LinearConstraints {
    &self.constraints
  }

  pub fn linear(&self) -> Option<&LinearCoefficients> {
    self.linear.as_ref()
  }
}

impl Display for QuadraticProgram {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "(quadratic={}, constraints={}", self.quadratic.as_matrix(), self.constraints)?;
    if let Some(linear) = &self.linear {
      write!(f, ", linear={linear}")?;
    }
    write!(f, ")")
  }
}

#[cfg(test)]
mod tests {
  use super::QuadraticProgram;
  use crate::error::ErrorKind;
  use crate::library::optimisation::LinearCoefficients;
  use crate::library::optimisation::LinearConstraints;
  use crate::library::optimisation::QuadraticCoefficients;

  fn quadratic() -> QuadraticCoefficients {
    QuadraticCoefficients::from_floats([vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap()
  }

  #[test]
  fn dimensions_must_agree() {
    assert!(QuadraticProgram::new(quadratic(), LinearConstraints::empty(2), None).is_ok());

    let err = QuadraticProgram::new(quadratic(), LinearConstraints::empty(3), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let linear = LinearCoefficients::from_floats([1.0]).unwrap();
    assert!(QuadraticProgram::new(quadratic(), LinearConstraints::empty(2), Some(linear)).is_err());
  }

  #[test]
  fn zero_dimensional_program_is_well_formed() {
    let p = QuadraticProgram::new(QuadraticCoefficients::empty(), LinearConstraints::empty(0), None).unwrap();
    assert_eq!(p.n(), 0);
    assert!(p.linear().is_none());
  }
}
