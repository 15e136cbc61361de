//! # Price
//!
//! $$
//! r_t = \ln\frac{P_t}{P_{t-1}}
//! $$
//!

use super::rate::Rate;
use super::rate::RateMatrix;
use super::rate::RateSequence;
use crate::error::PortanError;
use crate::error::Result;
use crate::utilities::Matrix;
use crate::utilities::Sequence;

scalar!(
  /// Observed price of an instrument; finite and strictly positive.
  Price,
  |v| v.is_finite() && v > 0.0,
  "be finite and strictly positive"
);

/// Prices of a single instrument, oldest first.
pub type PriceSequence = Sequence<Price>;

/// Prices, one row per instrument.
pub type PriceMatrix = Matrix<Price>;

impl Price {
  /// Continuous growth from `begin` to `self`.
  pub fn growth(self, begin: Price) -> Result<Rate> {
    let value = (self.0 / begin.0).ln();
    if !value.is_finite() {
      return Err(PortanError::domain(format!(
        "cannot determine growth from {begin} to {self}; log-ratio is not finite"
      )));
    }
    Rate::new(value)
  }
}

impl Sequence<Price> {
  /// Growth rates between consecutive prices. Fewer than two prices have no growth.
  pub fn growth(&self) -> Result<RateSequence> {
    self
      .as_slice()
      .windows(2)
      .map(|pair| pair[1].growth(pair[0]))
      .collect()
  }
}

impl Matrix<Price> {
  /// Matrix of `k` rows without prices.
  pub fn empties(k: usize) -> Self {
    Self::new((0..k).map(|_| Sequence::empty())).unwrap_or_default()
  }

  /// Growth rates of every row.
  pub fn growth(&self) -> Result<RateMatrix> {
    let rows = self.rows().map(PriceSequence::growth).collect::<Result<Vec<_>>>()?;
    RateMatrix::new(rows)
  }
}
