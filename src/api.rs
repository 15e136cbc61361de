//! # API
//!
//! $$
//! (\text{ids}, [d_0, d_1], r_{\min}^{\text{annual}}) \mapsto (\text{id}, w_{\text{id}} \in \mathbb{Z})_{\text{id}}
//! $$
//!
//! Facades over the library: single instruments, fixed-weight portfolios and
//! mean-variance allocation, all fed by a caller-provided price source.

pub mod instrument;
pub mod mvo;
pub mod portfolio;

pub use instrument::Instrument;
pub use mvo::Allocation;
pub use mvo::Mvo;
pub use mvo::MvoConfig;
pub use portfolio::Portfolio;

use crate::error::PortanError;
use crate::error::Result;
use crate::error::ResultExt;
use crate::source::DateRange;

/// Failure of a price source, with its whole cause chain.
pub(crate) fn source_error(err: anyhow::Error) -> PortanError {
  PortanError::source(format!("cannot fetch prices from source; {err:#}"))
}

/// Range from ISO `(begin, end)` dates.
pub(crate) fn parse_range(range: (&str, &str), operation: &str) -> Result<DateRange> {
  DateRange::parse(range.0, range.1).with_context(|| {
    format!(
      "{operation}; range should hold valid ISO dates (YYYY-MM-DD) with end not prior to begin"
    )
  })
}
