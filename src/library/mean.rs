//! # Mean
//!
//! $$
//! \bar{x} = \frac{1}{n}\sum_{i=1}^{n} x_i, \qquad \mu_p = \sum_i f_i\,\bar{x}_i
//! $$
//!

use crate::error::PortanError;
use crate::error::Result;
use crate::utilities::Sequence;

scalar!(
  /// Central point of a set of values. May diverge to infinity, never NaN.
  Mean,
  |v| !v.is_nan(),
  "not be NaN"
);

/// Means in instrument order.
pub type MeanSequence = Sequence<Mean>;

impl Mean {
  pub fn zero() -> Self {
    Self(0.0)
  }

  /// Mean of `factor * X`.
  pub fn scale(self, factor: f64) -> Result<Self> {
    if factor.is_nan() {
      return Err(PortanError::validation("cannot scale; factor must not be NaN"));
    }
    Self::new(self.0 * factor)
  }

  pub fn try_add(self, other: Self) -> Result<Self> {
    Self::new(self.0 + other.0)
  }
}

impl Sequence<Mean> {
  /// Weighted sum `Σ factors[i] * self[i]`. An empty sequence sums to zero.
  pub fn weighted_sum(&self, factors: &[f64]) -> Result<Mean> {
    if self.is_empty() {
      return Ok(Mean::zero());
    }
    if factors.len() != self.len() {
      return Err(PortanError::validation(format!(
        "cannot scale; length of factors ({}) must be equal to the length of this sequence ({})",
        factors.len(),
        self.len()
      )));
    }
    self
      .iter()
      .zip(factors)
      .try_fold(Mean::zero(), |acc, (mean, &factor)| {
        acc.try_add(mean.scale(factor)?)
      })
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use super::Mean;
  use super::MeanSequence;
  use crate::error::ErrorKind;

  #[test]
  fn scale_rejects_nan_factor() {
    let mean = Mean::new(0.5).unwrap();
    assert_eq!(mean.scale(252.0).unwrap().value(), 126.0);
    assert_eq!(mean.scale(f64::NAN).unwrap_err().kind(), ErrorKind::Validation);
  }

  #[test]
  fn opposite_infinities_do_not_add() {
    let inf = Mean::new(f64::INFINITY).unwrap();
    let neg = Mean::new(f64::NEG_INFINITY).unwrap();
    assert_eq!(inf.try_add(neg).unwrap_err().kind(), ErrorKind::Validation);
    assert_eq!(inf.try_add(inf).unwrap().value(), f64::INFINITY);
  }

  #[test]
  fn weighted_sum_uses_factors() {
    let means = MeanSequence::from_floats([0.1, 0.2, 0.4]).unwrap();
    let sum = means.weighted_sum(&[0.5, 0.25, 0.25]).unwrap();
    assert_relative_eq!(sum.value(), 0.05 + 0.05 + 0.1, epsilon = 1e-15);
  }

  #[test]
  fn weighted_sum_checks_lengths() {
    let means = MeanSequence::from_floats([0.1, 0.2]).unwrap();
    assert!(means.weighted_sum(&[1.0]).is_err());
    assert_eq!(MeanSequence::empty().weighted_sum(&[1.0]).unwrap(), Mean::zero());
  }
}
