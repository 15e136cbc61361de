//! # Weight
//!
//! $$
//! w = \operatorname{round}_{\text{half-even}}(100\,x), \qquad \sum_i w_i = 100
//! $$
//!

use std::fmt::Display;
use std::ops::Deref;

use crate::error::PortanError;
use crate::error::Result;
use crate::error::ResultExt;
use crate::utilities::Sequence;

/// Integer percentage of capital; `Weight(25)` is 25 %.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(i64);

/// Weights in instrument order.
pub type WeightSequence = Sequence<Weight>;

impl Weight {
  pub fn new(value: i64) -> Self {
    Self(value)
  }

  /// Percentage nearest to the fraction `value`, ties to even.
  ///
  /// `0.255` and `0.265` both become `26`.
  pub fn from_float(value: f64) -> Result<Self> {
    if value.is_nan() {
      return Err(PortanError::validation(
        "cannot instantiate Weight; value must not be NaN",
      ));
    }
    let rounded = (value * 100.0).round_ties_even();
    if !(rounded >= i64::MIN as f64 && rounded < i64::MAX as f64) {
      return Err(PortanError::overflow(format!(
        "cannot instantiate Weight; {value} exceeds the representable range"
      )));
    }
    Ok(Self(rounded as i64))
  }

  pub fn value(self) -> i64 {
    self.0
  }

  /// The weight as a fraction of one, i.e. `25 -> 0.25`.
  pub fn as_fraction(self) -> f64 {
    self.0 as f64 / 100.0
  }

  pub fn checked_add(self, other: Self) -> Result<Self> {
    self.0.checked_add(other.0).map(Self).ok_or_else(|| {
      PortanError::overflow(format!(
        "cannot add weights; {self} + {other} exceeds the representable range"
      ))
    })
  }
}

/// Two decimals taken from the integer, so `Weight(120)` reads `1.20`.
impl Display for Weight {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let sign = if self.0 < 0 { "-" } else { "" };
    let abs = self.0.unsigned_abs();
    write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
  }
}

impl From<i64> for Weight {
  fn from(value: i64) -> Self {
    Self(value)
  }
}

impl From<Weight> for i64 {
  fn from(value: Weight) -> i64 {
    value.0
  }
}

impl TryFrom<f64> for Weight {
  type Error = PortanError;

  fn try_from(value: f64) -> Result<Self> {
    Self::from_float(value)
  }
}

impl Sequence<Weight> {
  pub fn from_ints(values: impl IntoIterator<Item = i64>) -> Self {
    values.into_iter().map(Weight::new).collect()
  }

  pub fn sum(&self) -> Result<Weight> {
    self
      .iter()
      .try_fold(Weight::default(), |acc, &w| acc.checked_add(w))
  }

  pub fn as_fractions(&self) -> Vec<f64> {
    self.iter().map(|w| w.as_fraction()).collect()
  }
}

/// Weight sequence summing to exactly 100.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BalancedWeights(WeightSequence);

impl BalancedWeights {
  pub fn new(weights: WeightSequence) -> Result<Self> {
    let sum = weights
      .sum()
      .context("cannot instantiate BalancedWeights; weights must sum to 100")?
      .value();
    if sum != 100 {
      return Err(PortanError::validation(format!(
        "cannot instantiate BalancedWeights; weights must sum to 100 (got {sum})"
      )));
    }
    Ok(Self(weights))
  }

  pub fn into_inner(self) -> WeightSequence {
    self.0
  }
}

impl Deref for BalancedWeights {
  type Target = WeightSequence;

  fn deref(&self) -> &WeightSequence {
    &self.0
  }
}

#[cfg(test)]
mod tests {
  use rand::rngs::StdRng;
  use rand::Rng;
  use rand::SeedableRng;

  use super::BalancedWeights;
  use super::Weight;
  use super::WeightSequence;
  use crate::error::ErrorKind;

  #[test]
  fn from_float_rounds_half_to_even() {
    assert_eq!(Weight::from_float(0.255).unwrap(), Weight::new(26));
    assert_eq!(Weight::from_float(0.265).unwrap(), Weight::new(26));
    assert_eq!(Weight::from_float(0.125).unwrap(), Weight::new(12));
    assert_eq!(Weight::from_float(1.0).unwrap(), Weight::new(100));
    assert_eq!(Weight::from_float(-0.0001).unwrap(), Weight::new(0));
  }

  #[test]
  fn from_float_rejects_nan_and_overflow() {
    assert_eq!(Weight::from_float(f64::NAN).unwrap_err().kind(), ErrorKind::Validation);
    assert_eq!(Weight::from_float(f64::INFINITY).unwrap_err().kind(), ErrorKind::Overflow);
    assert_eq!(Weight::from_float(1e300).unwrap_err().kind(), ErrorKind::Overflow);
  }

  #[test]
  fn display_as_fraction() {
    assert_eq!(Weight::new(25).to_string(), "0.25");
    assert_eq!(Weight::new(100).to_string(), "1.00");
    assert_eq!(Weight::new(120).to_string(), "1.20");
    assert_eq!(Weight::new(0).to_string(), "0.00");
    assert_eq!(Weight::new(-5).to_string(), "-0.05");
    assert_eq!(Weight::new(-250).to_string(), "-2.50");
    assert_eq!(Weight::new(123456789012345678).to_string(), "1234567890123456.78");
    assert_eq!(Weight::new(i64::MIN).to_string(), "-92233720368547758.08");
    assert_eq!(Weight::new(25).as_fraction(), 0.25);
  }

  #[test]
  fn balanced_weights_sum_to_hundred() {
    let weights = WeightSequence::from_ints([25, 25, 50]);
    assert_eq!(weights.sum().unwrap(), Weight::new(100));
    let balanced = BalancedWeights::new(weights.clone()).unwrap();
    assert_eq!(balanced.as_fractions(), vec![0.25, 0.25, 0.5]);

    let back = WeightSequence::from_floats(balanced.as_fractions()).unwrap();
    assert_eq!(back, weights);

    assert!(BalancedWeights::new(WeightSequence::from_ints([50, 49])).is_err());
  }

  #[test]
  fn overflowing_sum_is_rejected() {
    let weights = WeightSequence::from_ints([i64::MAX, i64::MAX, 102]);
    assert_eq!(weights.sum().unwrap_err().kind(), ErrorKind::Overflow);

    let err = BalancedWeights::new(weights).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
    assert!(err.message().starts_with("cannot instantiate BalancedWeights"));

    let err = WeightSequence::from_ints([i64::MIN, -1]).sum().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Overflow);
  }

  #[test]
  fn random_balanced_weights_survive_fractions() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
      let k = rng.gen_range(1..=10);
      let mut cuts: Vec<i64> = (1..k).map(|_| rng.gen_range(0..=100)).collect();
      cuts.push(0);
      cuts.push(100);
      cuts.sort_unstable();
      let weights = WeightSequence::from_ints(cuts.windows(2).map(|w| w[1] - w[0]));
      assert_eq!(weights.len(), k);

      let balanced = BalancedWeights::new(weights.clone()).unwrap();
      let back = WeightSequence::from_floats(balanced.as_fractions()).unwrap();
      assert_eq!(back, weights);
      assert_eq!(back.sum().unwrap(), Weight::new(100));
    }
  }
}
