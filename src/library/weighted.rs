//! # Weighted
//!
//! $$
//! \mu_p = \sum_i w_i \bar r_i, \qquad \sigma_p = \sqrt{\mathbf{w}^\top \Sigma\, \mathbf{w}}
//! $$
//!

use std::fmt::Display;

use super::brownian::ArithmeticBrownian;
use super::mean::Mean;
use super::rate::RateMatrix;
use super::scatter::Dispersion;
use super::weight::WeightSequence;
use crate::error::PortanError;
use crate::error::Result;
use crate::error::ResultExt;

/// Rate rows of several instruments combined by percentage weights.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Weighted {
  weights: WeightSequence,
  rates: RateMatrix,
}

impl Weighted {
  /// Pair one weight with each rate row.
  pub fn new(weights: WeightSequence, rates: RateMatrix) -> Result<Self> {
    if weights.len() != rates.nrows() {
      return Err(PortanError::validation(format!(
        "cannot instantiate Weighted; length of weights ({}) must be equal to the number of rate rows ({})",
        weights.len(),
        rates.nrows()
      )));
    }
    Ok(Self { weights, rates })
  }

  pub fn empty() -> Self {
    Self::default()
  }

  pub fn weights(&self) -> &WeightSequence {
    &self.weights
  }

  pub fn rates(&self) -> &RateMatrix {
    &self.rates
  }
}

impl ArithmeticBrownian for Weighted {
  fn mean(&self) -> Result<Mean> {
    self
      .rates
      .means()?
      .weighted_sum(&self.weights.as_fractions())
      .context("cannot determine weighted mean")
  }

  fn dispersion(&self) -> Result<Dispersion> {
    let variance = self
      .rates
      .covariances()?
      .variance(&self.weights.as_fractions())
      .context("cannot determine weighted dispersion")?;
    Ok(variance.to_dispersion())
  }
}

impl Display for Weighted {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "(weights={}, rates={})", self.weights, self.rates)
  }
}
