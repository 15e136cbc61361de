use std::collections::HashSet;

use tracing::debug;

use super::parse_range;
use super::source_error;
use crate::error::PortanError;
use crate::error::Result;
use crate::error::ResultExt;
use crate::library::ArithmeticBrownian;
use crate::library::BalancedWeights;
use crate::library::BrownianConverter;
use crate::library::Frequency;
use crate::library::RateMatrix;
use crate::library::WeightSequence;
use crate::library::Weighted;
use crate::source::DateRange;
use crate::source::DatedPricesSeries;
use crate::source::MultipleSource;
use crate::source::SingleSource;

/// Instruments held in fixed integer percentages.
pub struct Portfolio<S> {
  identifiers: Vec<String>,
  weights: BalancedWeights,
  range: DateRange,
  source: MultipleSource<S>,
  dated: Option<DatedPricesSeries>,
}

impl<S: SingleSource> Portfolio<S> {
  /// `allocation` maps each identifier to a percentage; percentages must sum
  /// to 100 and identifiers must be distinct.
  pub fn new<I: Into<String>>(
    allocation: impl IntoIterator<Item = (I, i64)>,
    range: (&str, &str),
    source: S,
  ) -> Result<Self> {
    let (identifiers, weights): (Vec<String>, Vec<i64>) = allocation
      .into_iter()
      .map(|(identifier, weight)| (identifier.into(), weight))
      .unzip();

    let mut seen = HashSet::new();
    if let Some(duplicate) = identifiers.iter().find(|id| !seen.insert(id.as_str())) {
      return Err(PortanError::validation(format!(
        "cannot instantiate Portfolio; identifier '{duplicate}' is allocated twice"
      )));
    }

    let weights = BalancedWeights::new(WeightSequence::from_ints(weights))
      .context("cannot instantiate Portfolio")?;

    Ok(Self {
      identifiers,
      weights,
      range: parse_range(range, "cannot instantiate Portfolio")?,
      source: MultipleSource::new(source),
      dated: None,
    })
  }

  pub fn identifiers(&self) -> &[String] {
    &self.identifiers
  }

  pub fn weights(&self) -> &WeightSequence {
    &self.weights
  }

  pub fn fetch(&mut self) -> Result<()> {
    let dated = self
      .source
      .get(&self.identifiers, &self.range)
      .map_err(source_error)?;
    debug!(instruments = self.identifiers.len(), days = dated.len(), "fetched portfolio prices");
    self.dated = Some(dated);
    Ok(())
  }

  /// Prices per day, one per instrument in allocation order.
  pub fn prices(&self) -> Result<&DatedPricesSeries> {
    self.dated.as_ref().ok_or_else(|| {
      PortanError::validation("cannot perform operation; prices must be fetched first")
    })
  }

  /// Annualised mean of the portfolio's continuous returns.
  pub fn mean(&self) -> Result<f64> {
    let weighted = self.weighted()?;
    let annual = BrownianConverter::new(&weighted, Frequency::Daily, Frequency::Annual);
    Ok(annual.mean()?.value())
  }

  /// Annualised volatility of the portfolio's continuous returns.
  pub fn volatility(&self) -> Result<f64> {
    let weighted = self.weighted()?;
    let annual = BrownianConverter::new(&weighted, Frequency::Daily, Frequency::Annual);
    Ok(annual.dispersion()?.value())
  }

  /// Correlations between instruments, in allocation order.
  pub fn correlations(&self) -> Result<Vec<Vec<f64>>> {
    let correlations = self
      .rates()?
      .correlations()
      .context("cannot determine correlations")?;
    Ok(correlations.to_floats())
  }

  fn weighted(&self) -> Result<Weighted> {
    Weighted::new(self.weights.clone().into_inner(), self.rates()?)
  }

  fn rates(&self) -> Result<RateMatrix> {
    self
      .prices()?
      .prices()?
      .growth()
      .context("cannot determine rates of growth")
  }
}
