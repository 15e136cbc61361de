//! # Source
//!
//! $$
//! \mathcal{S} : (\text{id}, [d_0, d_1]) \mapsto \{(d, P_d) : d_0 \le d \le d_1\}
//! $$
//!
//! Boundary to price providers. Providers are implemented by callers and may
//! fail for any reason, so they speak [`anyhow::Result`]; the facade maps those
//! failures onto [`crate::ErrorKind::Source`].

pub mod date;
pub mod dated;
pub mod memory;

use anyhow::Context;
use tracing::debug;

pub use date::DateRange;
pub use dated::Dated;
pub use dated::DatedPriceSeries;
pub use dated::DatedPricesSeries;
pub use dated::DatedPricesSeriesBuilder;
pub use dated::DatedSeries;
pub use memory::MemorySource;

/// Provider of dated prices for one instrument.
pub trait SingleSource {
  /// Prices of `identifier` on every available day inside `range` (inclusive).
  fn get(&self, identifier: &str, range: &DateRange) -> anyhow::Result<DatedPriceSeries>;
}

impl<S: SingleSource + ?Sized> SingleSource for &S {
  fn get(&self, identifier: &str, range: &DateRange) -> anyhow::Result<DatedPriceSeries> {
    (**self).get(identifier, range)
  }
}

impl<S: SingleSource + ?Sized> SingleSource for Box<S> {
  fn get(&self, identifier: &str, range: &DateRange) -> anyhow::Result<DatedPriceSeries> {
    (**self).get(identifier, range)
  }
}

/// Prices of several instruments fetched one by one from a [`SingleSource`],
/// keeping only the days on which every instrument has a price.
#[derive(Clone, Debug)]
pub struct MultipleSource<S> {
  single: S,
}

impl<S: SingleSource> MultipleSource<S> {
  pub fn new(single: S) -> Self {
    Self { single }
  }

  pub fn single(&self) -> &S {
    &self.single
  }

  /// Columns follow the order of `identifiers`. No identifiers yield an empty
  /// series without querying the provider.
  pub fn get<I: AsRef<str>>(
    &self,
    identifiers: &[I],
    range: &DateRange,
  ) -> anyhow::Result<DatedPricesSeries> {
    if identifiers.is_empty() {
      return Ok(DatedPricesSeries::empty(0));
    }
    let mut builder = DatedPricesSeriesBuilder::new();
    for identifier in identifiers {
      let identifier = identifier.as_ref();
      let single = self
        .single
        .get(identifier, range)
        .with_context(|| format!("cannot fetch prices of {identifier} for {range}"))?;
      debug!(identifier, days = single.len(), "fetched prices");
      builder.add(single)?;
    }
    Ok(builder.build()?)
  }
}
