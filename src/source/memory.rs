use std::collections::HashMap;

use anyhow::anyhow;

use super::date::DateRange;
use super::dated::DatedPriceSeries;
use super::SingleSource;

/// Prices held in memory, keyed by identifier.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
  prices: HashMap<String, DatedPriceSeries>,
}

impl MemorySource {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add or replace the prices of `identifier`.
  pub fn with(mut self, identifier: impl Into<String>, prices: DatedPriceSeries) -> Self {
    self.insert(identifier, prices);
    self
  }

  pub fn insert(&mut self, identifier: impl Into<String>, prices: DatedPriceSeries) {
    self.prices.insert(identifier.into(), prices);
  }
}

impl SingleSource for MemorySource {
  fn get(&self, identifier: &str, range: &DateRange) -> anyhow::Result<DatedPriceSeries> {
    let prices = self
      .prices
      .get(identifier)
      .ok_or_else(|| anyhow!("unknown identifier '{identifier}'"))?;
    Ok(prices.filter(|date| range.contains(date)))
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::MemorySource;
  use crate::source::DateRange;
  use crate::source::DatedPriceSeries;
  use crate::source::MultipleSource;
  use crate::source::SingleSource;

  fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 5, d).unwrap()
  }

  fn source() -> MemorySource {
    MemorySource::new()
      .with(
        "AAA",
        DatedPriceSeries::from_floats([(day(1), 10.0), (day(2), 11.0), (day(3), 12.0)]).unwrap(),
      )
      .with(
        "BBB",
        DatedPriceSeries::from_floats([(day(2), 20.0), (day(3), 21.0), (day(4), 22.0)]).unwrap(),
      )
  }

  #[test]
  fn single_filters_by_range() {
    let range = DateRange::new(day(2), day(5)).unwrap();
    let prices = source().get("AAA", &range).unwrap();
    assert_eq!(prices.prices().to_floats(), vec![11.0, 12.0]);
  }

  #[test]
  fn unknown_identifier_fails() {
    let range = DateRange::new(day(1), day(5)).unwrap();
    let err = source().get("ZZZ", &range).unwrap_err();
    assert!(err.to_string().contains("ZZZ"));
  }

  #[test]
  fn multiple_keeps_common_days_in_identifier_order() {
    let range = DateRange::new(day(1), day(5)).unwrap();
    let multiple = MultipleSource::new(source());
    let series = multiple.get(&["BBB", "AAA"], &range).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.prices().unwrap().to_floats(), vec![vec![20.0, 21.0], vec![11.0, 12.0]]);
  }

  #[test]
  fn multiple_without_identifiers_is_empty() {
    let range = DateRange::new(day(1), day(5)).unwrap();
    let series = MultipleSource::new(MemorySource::new()).get::<&str>(&[], &range).unwrap();
    assert!(series.is_empty());
    assert_eq!(series.width(), 0);
  }

  #[test]
  fn multiple_reports_failing_identifier() {
    let range = DateRange::new(day(1), day(5)).unwrap();
    let err = MultipleSource::new(source()).get(&["AAA", "ZZZ"], &range).unwrap_err();
    assert!(format!("{err:#}").contains("unknown identifier 'ZZZ'"));
  }
}
