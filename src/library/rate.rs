//! # Rate
//!
//! $$
//! \bar r = \frac{1}{n}\sum_i r_i,\qquad
//! s^2 = \frac{1}{n-1}\sum_i (r_i - \bar r)^2,\qquad
//! \operatorname{cov}(a, b) = \frac{1}{n-1}\sum_i (a_i - \bar a)(b_i - \bar b)
//! $$
//!
//! Continuous growth rates and their sample statistics.

use ndarray::Array1;
use tracing::trace;

use super::frequency::Frequency;
use super::mean::Mean;
use super::mean::MeanSequence;
use super::scatter::Correlation;
use super::scatter::CorrelationMatrix;
use super::scatter::Covariance;
use super::scatter::CovarianceMatrix;
use super::scatter::Dispersion;
use crate::error::PortanError;
use crate::error::Result;
use crate::utilities::Matrix;
use crate::utilities::Sequence;

scalar!(
  /// Continuous (logarithmic) growth rate.
  Rate,
  |v| v.is_finite(),
  "be finite"
);

/// Growth rates of a single instrument, oldest first.
pub type RateSequence = Sequence<Rate>;

/// Growth rates, one row per instrument.
pub type RateMatrix = Matrix<Rate>;

impl Rate {
  /// Same rate expressed at another sampling frequency.
  pub fn convert(self, from: Frequency, to: Frequency) -> Result<Self> {
    Self::new(self.0 * Frequency::factor(from, to))
  }
}

impl Sequence<Rate> {
  /// Sample mean. Empty sequences have mean zero.
  pub fn mean(&self) -> Result<Mean> {
    match self.len() {
      0 => Ok(Mean::zero()),
      1 => Mean::new(self[0].value()),
      _ => {
        let value = self.to_array().mean().ok_or_else(|| {
          PortanError::domain("cannot determine mean; sequence has no values")
        })?;
        Mean::new(value)
      }
    }
  }

  /// Sample standard deviation with `n - 1` degrees of freedom.
  pub fn dispersion(&self) -> Result<Dispersion> {
    if self.len() <= 1 {
      return Ok(Dispersion::zero());
    }
    Dispersion::new(self.to_array().std(1.0))
  }

  pub fn covariance(&self, other: &Self) -> Result<Covariance> {
    if self.len() != other.len() {
      return Err(PortanError::validation(format!(
        "cannot determine covariance; sequences differ in length ({} vs {})",
        self.len(),
        other.len()
      )));
    }
    if self.len() <= 1 {
      return Ok(Covariance::zero());
    }
    let products = centered(&self.to_array()).dot(&centered(&other.to_array()));
    Covariance::new(products / (self.len() - 1) as f64)
  }

  /// Pearson correlation; zero when either side does not vary.
  pub fn correlation(&self, other: &Self) -> Result<Correlation> {
    let covariance = self.covariance(other)?;
    let a = self.dispersion()?.value();
    let b = other.dispersion()?.value();
    if a == 0.0 || b == 0.0 {
      return Ok(Correlation::zero());
    }
    Correlation::robust(covariance.value() / (a * b))
  }
}

fn centered(values: &Array1<f64>) -> Array1<f64> {
  let mean = values.mean().unwrap_or(0.0);
  values - mean
}

impl Matrix<Rate> {
  /// Mean of each row.
  pub fn means(&self) -> Result<MeanSequence> {
    self.rows().map(RateSequence::mean).collect()
  }

  /// Sample covariance between every pair of rows.
  pub fn covariances(&self) -> Result<CovarianceMatrix> {
    let rows = self.pairwise(RateSequence::covariance, Covariance::zero())?;
    CovarianceMatrix::from_rows(rows)
  }

  /// Sample correlation between every pair of rows.
  pub fn correlations(&self) -> Result<CorrelationMatrix> {
    let rows = self.pairwise(RateSequence::correlation, Correlation::zero())?;
    CorrelationMatrix::from_rows(rows)
  }

  /// Fill the upper triangle with `f` and mirror it, so the result is exactly
  /// symmetric.
  fn pairwise<T: Copy>(
    &self,
    f: impl Fn(&RateSequence, &RateSequence) -> Result<T>,
    zero: T,
  ) -> Result<Vec<Sequence<T>>> {
    let rows: Vec<&RateSequence> = self.rows().collect();
    let n = rows.len();
    trace!(n, ncols = self.ncols(), "pairwise rate statistics");
    let mut grid = vec![vec![zero; n]; n];
    for i in 0..n {
      for j in i..n {
        let value = f(rows[i], rows[j])?;
        grid[i][j] = value;
        grid[j][i] = value;
      }
    }
    Ok(grid.into_iter().map(Sequence::new).collect())
  }
}
