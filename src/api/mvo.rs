use std::collections::HashSet;

use tracing::debug;

use super::parse_range;
use super::source_error;
use crate::error::ErrorKind;
use crate::error::Result;
use crate::error::ResultExt;
use crate::library::Frequency;
use crate::library::MeanVarianceOptimiser;
use crate::library::OsqpSettings;
use crate::library::OsqpSolver;
use crate::library::PriceMatrix;
use crate::library::Rate;
use crate::source::MultipleSource;
use crate::source::SingleSource;

/// Percentage per identifier, in first-seen order of the requested identifiers.
pub type Allocation = Vec<(String, i64)>;

/// Settings of [`Mvo`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MvoConfig {
  /// Frequency the caller expresses the minimum in.
  pub from: Frequency,
  /// Sampling frequency of the fetched prices.
  pub to: Frequency,
  pub solver: OsqpSettings,
}

impl Default for MvoConfig {
  fn default() -> Self {
    Self {
      from: Frequency::Annual,
      to: Frequency::Daily,
      solver: OsqpSettings::default(),
    }
  }
}

/// Mean-variance allocation over prices fetched from a source.
pub struct Mvo<S> {
  source: MultipleSource<S>,
  config: MvoConfig,
}

impl<S: SingleSource> Mvo<S> {
  pub fn new(source: S) -> Self {
    Self::with_config(source, MvoConfig::default())
  }

  pub fn with_config(source: S, config: MvoConfig) -> Self {
    Self {
      source: MultipleSource::new(source),
      config,
    }
  }

  pub fn config(&self) -> &MvoConfig {
    &self.config
  }

  /// Integer percentages minimising the variance of the portfolio over
  /// `range` while keeping its expected return at or above `minimum`.
  ///
  /// `minimum` is expressed at the `from` frequency of the configuration.
  /// Percentages are rounded one by one, so they may not sum to exactly 100.
  pub fn optimise<I: Into<String>>(
    &self,
    identifiers: impl IntoIterator<Item = I>,
    range: (&str, &str),
    minimum: f64,
  ) -> Result<Allocation> {
    let identifiers = distinct(identifiers);
    let range = parse_range(range, "cannot optimise")?;
    let minimum = Rate::new(minimum)
      .context("cannot optimise; minimum must be finite")?
      .convert(self.config.from, self.config.to)?;
    let solver = OsqpSolver::new(self.config.solver).context("cannot optimise")?;

    if identifiers.is_empty() {
      debug!("no instruments to optimise");
      return Ok(Allocation::new());
    }

    let dated = self
      .source
      .get(&identifiers, &range)
      .map_err(source_error)?;
    debug!(instruments = identifiers.len(), days = dated.len(), %range, "optimising allocation");

    let prices = if dated.is_empty() {
      PriceMatrix::empties(identifiers.len())
    } else {
      dated.prices()?
    };
    let rates = prices.growth().context("cannot optimise")?;

    let weights = MeanVarianceOptimiser::with_solver(solver)
      .optimise(&rates, minimum)
      .map_err(|err| match err.kind() {
        ErrorKind::Infeasible => err.context("consider reducing the minimum return"),
        _ => err,
      })?;

    Ok(
      identifiers
        .into_iter()
        .zip(weights.iter().map(|weight| weight.value()))
        .collect(),
    )
  }
}

fn distinct<I: Into<String>>(identifiers: impl IntoIterator<Item = I>) -> Vec<String> {
  let mut seen = HashSet::new();
  identifiers
    .into_iter()
    .map(Into::<String>::into)
    .filter(|identifier| seen.insert(identifier.clone()))
    .collect()
}
