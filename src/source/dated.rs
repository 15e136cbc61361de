//! # Dated
//!
//! $$
//! \{(d_k, v_k)\}_{k}, \qquad d_1 < d_2 < \dots < d_m
//! $$
//!

use std::collections::BTreeSet;
use std::fmt::Display;

use chrono::NaiveDate;
use impl_new_derive::ImplNew;

use crate::error::PortanError;
use crate::error::Result;
use crate::library::Price;
use crate::library::PriceMatrix;
use crate::library::PriceSequence;
use crate::utilities::Sequence;

/// Value observed on a calendar day.
#[derive(ImplNew, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Dated<T> {
  pub date: NaiveDate,
  pub value: T,
}

/// Dated values in strictly ascending date order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DatedSeries<T> {
  values: Vec<Dated<T>>,
}

/// Prices of one instrument.
pub type DatedPriceSeries = DatedSeries<Price>;

impl<T> DatedSeries<T> {
  /// Fails if dates are out of order or repeated.
  pub fn new(values: impl IntoIterator<Item = Dated<T>>) -> Result<Self> {
    let values: Vec<Dated<T>> = values.into_iter().collect();
    for pair in values.windows(2) {
      if pair[1].date == pair[0].date {
        return Err(PortanError::validation(format!(
          "cannot instantiate DatedSeries; date {} is duplicated",
          pair[0].date
        )));
      }
      if pair[1].date < pair[0].date {
        return Err(PortanError::validation(format!(
          "cannot instantiate DatedSeries; dates must be ascending ({} follows {})",
          pair[1].date, pair[0].date
        )));
      }
    }
    Ok(Self { values })
  }

  /// Sort by date first; duplicated dates still fail.
  pub fn from_unsorted(values: impl IntoIterator<Item = Dated<T>>) -> Result<Self> {
    let mut values: Vec<Dated<T>> = values.into_iter().collect();
    values.sort_by_key(|dated| dated.date);
    Self::new(values)
  }

  pub fn empty() -> Self {
    Self { values: Vec::new() }
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Dated<T>> {
    self.values.iter()
  }

  pub fn dates(&self) -> BTreeSet<NaiveDate> {
    self.values.iter().map(|dated| dated.date).collect()
  }

  /// Only the values dated inside `dates`.
  pub fn compress(&self, dates: &BTreeSet<NaiveDate>) -> Self
  where
    T: Clone,
  {
    Self {
      values: self
        .values
        .iter()
        .filter(|dated| dates.contains(&dated.date))
        .cloned()
        .collect(),
    }
  }

  /// Only the values for which `keep` holds.
  pub fn filter(&self, mut keep: impl FnMut(NaiveDate) -> bool) -> Self
  where
    T: Clone,
  {
    Self {
      values: self
        .values
        .iter()
        .filter(|dated| keep(dated.date))
        .cloned()
        .collect(),
    }
  }
}

impl<T> Default for DatedSeries<T> {
  fn default() -> Self {
    Self::empty()
  }
}

impl<T: Display> Display for DatedSeries<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "(")?;
    for (i, dated) in self.values.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{}: {}", dated.date, dated.value)?;
    }
    write!(f, ")")
  }
}

impl DatedSeries<Price> {
  /// Series from `(date, price)` pairs in any order.
  pub fn from_floats(values: impl IntoIterator<Item = (NaiveDate, f64)>) -> Result<Self> {
    let values = values
      .into_iter()
      .map(|(date, price)| Ok(Dated::new(date, Price::new(price)?)))
      .collect::<Result<Vec<_>>>()?;
    Self::from_unsorted(values)
  }

  pub fn prices(&self) -> PriceSequence {
    self.values.iter().map(|dated| dated.value).collect()
  }
}

/// Prices of several instruments on shared days. Every day holds one price per
/// instrument, in instrument order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DatedPricesSeries {
  series: DatedSeries<PriceSequence>,
  width: usize,
}

impl DatedPricesSeries {
  /// Fails unless every day holds exactly `width` prices.
  pub fn new(series: DatedSeries<PriceSequence>, width: usize) -> Result<Self> {
    if let Some(dated) = series.iter().find(|dated| dated.value.len() != width) {
      return Err(PortanError::validation(format!(
        "cannot instantiate DatedPricesSeries; {} holds {} prices, expected {width}",
        dated.date,
        dated.value.len()
      )));
    }
    Ok(Self { series, width })
  }

  /// Series over `width` instruments without any day.
  pub fn empty(width: usize) -> Self {
    Self {
      series: DatedSeries::empty(),
      width,
    }
  }

  pub fn from_single(single: &DatedPriceSeries) -> Self {
    let values = single
      .iter()
      .map(|dated| Dated::new(dated.date, Sequence::new([dated.value])))
      .collect();
    Self {
      series: DatedSeries { values },
      width: 1,
    }
  }

  /// Number of instruments.
  pub fn width(&self) -> usize {
    self.width
  }

  pub fn len(&self) -> usize {
    self.series.len()
  }

  pub fn is_empty(&self) -> bool {
    self.series.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Dated<PriceSequence>> {
    self.series.iter()
  }

  pub fn dates(&self) -> BTreeSet<NaiveDate> {
    self.series.dates()
  }

  pub fn compress(&self, dates: &BTreeSet<NaiveDate>) -> Self {
    Self {
      series: self.series.compress(dates),
      width: self.width,
    }
  }

  /// Append `single` as a new instrument. Both must cover the same days.
  pub fn add(&self, single: &DatedPriceSeries) -> Result<Self> {
    let same_dates = self.len() == single.len()
      && self.iter().zip(single.iter()).all(|(a, b)| a.date == b.date);
    if !same_dates {
      return Err(PortanError::validation(
        "cannot add; single must have the same dates as this series",
      ));
    }
    let values = self
      .iter()
      .zip(single.iter())
      .map(|(row, dated)| Dated::new(row.date, row.value.with(dated.value)))
      .collect();
    Ok(Self {
      series: DatedSeries { values },
      width: self.width + 1,
    })
  }

  /// Instrument-major price matrix: one row per instrument, oldest day first.
  /// Without any day, this is `width` empty rows.
  pub fn prices(&self) -> Result<PriceMatrix> {
    PriceMatrix::new((0..self.width).map(|j| {
      self
        .iter()
        .map(|dated| dated.value[j])
        .collect::<PriceSequence>()
    }))
  }
}

/// Accumulates single-instrument series, keeping only the days common to all.
#[derive(Debug, Default)]
pub struct DatedPricesSeriesBuilder {
  series: Option<DatedPricesSeries>,
}

impl DatedPricesSeriesBuilder {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&mut self, single: DatedPriceSeries) -> Result<()> {
    let next = match &self.series {
      None => DatedPricesSeries::from_single(&single),
      Some(series) => {
        let common: BTreeSet<NaiveDate> = series
          .dates()
          .intersection(&single.dates())
          .copied()
          .collect();
        series.compress(&common).add(&single.compress(&common))?
      }
    };
    self.series = Some(next);
    Ok(())
  }

  pub fn build(self) -> Result<DatedPricesSeries> {
    self
      .series
      .ok_or_else(|| PortanError::validation("cannot build; no series were added"))
  }
}
