use tracing::debug;

use super::parse_range;
use super::source_error;
use crate::error::PortanError;
use crate::error::Result;
use crate::error::ResultExt;
use crate::library::ArithmeticBrownian;
use crate::library::BrownianConverter;
use crate::library::Frequency;
use crate::library::RateSequence;
use crate::source::DateRange;
use crate::source::DatedPriceSeries;
use crate::source::SingleSource;

/// Financial instrument described by its daily prices over a date range.
pub struct Instrument<S> {
  identifier: String,
  range: DateRange,
  source: S,
  dated: Option<DatedPriceSeries>,
}

impl<S: SingleSource> Instrument<S> {
  /// `range` holds ISO dates `(begin, end)`, both inclusive.
  pub fn new(identifier: impl Into<String>, range: (&str, &str), source: S) -> Result<Self> {
    Ok(Self {
      identifier: identifier.into(),
      range: parse_range(range, "cannot instantiate Instrument")?,
      source,
      dated: None,
    })
  }

  pub fn identifier(&self) -> &str {
    &self.identifier
  }

  pub fn range(&self) -> &DateRange {
    &self.range
  }

  /// Fetch prices from the source, replacing any previously fetched.
  pub fn fetch(&mut self) -> Result<()> {
    let dated = self
      .source
      .get(&self.identifier, &self.range)
      .map_err(source_error)?;
    debug!(identifier = %self.identifier, days = dated.len(), "fetched instrument prices");
    self.dated = Some(dated);
    Ok(())
  }

  pub fn prices(&self) -> Result<&DatedPriceSeries> {
    self.dated.as_ref().ok_or_else(|| {
      PortanError::validation("cannot perform operation; prices must be fetched first")
    })
  }

  /// Annualised mean of the continuous daily returns.
  pub fn mean(&self) -> Result<f64> {
    let rates = self.rates()?;
    let annual = BrownianConverter::new(&rates, Frequency::Daily, Frequency::Annual);
    Ok(annual.mean()?.value())
  }

  /// Annualised volatility of the continuous daily returns.
  pub fn volatility(&self) -> Result<f64> {
    let rates = self.rates()?;
    let annual = BrownianConverter::new(&rates, Frequency::Daily, Frequency::Annual);
    Ok(annual.dispersion()?.value())
  }

  fn rates(&self) -> Result<RateSequence> {
    self
      .prices()?
      .prices()
      .growth()
      .context("cannot determine rates of growth")
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;
  use chrono::NaiveDate;

  use super::Instrument;
  use crate::error::ErrorKind;
  use crate::source::DatedPriceSeries;
  use crate::source::MemorySource;

  fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, d).unwrap()
  }

  fn source() -> MemorySource {
    MemorySource::new().with(
      "AAA",
      DatedPriceSeries::from_floats([(day(1), 100.0), (day(2), 101.0), (day(3), 100.5), (day(4), 102.0)])
        .unwrap(),
    )
  }

  #[test]
  fn invalid_range_is_rejected() {
    let err = Instrument::new("AAA", ("2021-06-04", "2021-06-01"), source()).err().unwrap();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(Instrument::new("AAA", ("2021-13-01", "2021-12-01"), source()).is_err());
  }

  #[test]
  fn operations_require_fetch() {
    let instrument = Instrument::new("AAA", ("2021-06-01", "2021-06-30"), source()).unwrap();
    assert_eq!(instrument.prices().unwrap_err().kind(), ErrorKind::Validation);
    assert!(instrument.mean().is_err());
    assert!(instrument.volatility().is_err());
  }

  #[test]
  fn annualises_daily_statistics() {
    let mut instrument = Instrument::new("AAA", ("2021-06-01", "2021-06-30"), source()).unwrap();
    instrument.fetch().unwrap();
    assert_eq!(instrument.prices().unwrap().len(), 4);

    let rates = instrument.rates().unwrap();
    assert_relative_eq!(instrument.mean().unwrap(), rates.mean().unwrap().value() * 252.0, epsilon = 1e-12);
    assert_relative_eq!(
      instrument.volatility().unwrap(),
      rates.dispersion().unwrap().value() * 252f64.sqrt(),
      epsilon = 1e-12
    );
  }

  #[test]
  fn source_failures_have_source_kind() {
    let mut instrument = Instrument::new("ZZZ", ("2021-06-01", "2021-06-30"), source()).unwrap();
    let err = instrument.fetch().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Source);
    assert!(err.message().contains("ZZZ"));
  }
}
