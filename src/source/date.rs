use std::fmt::Display;

use chrono::NaiveDate;

use crate::error::PortanError;
use crate::error::Result;

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Inclusive range of calendar days, `begin <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
  begin: NaiveDate,
  end: NaiveDate,
}

impl DateRange {
  pub fn new(begin: NaiveDate, end: NaiveDate) -> Result<Self> {
    if end < begin {
      return Err(PortanError::validation(format!(
        "cannot instantiate DateRange; end ({end}) must be greater than or equal to begin ({begin})"
      )));
    }
    Ok(Self { begin, end })
  }

  /// Range between two ISO dates (`YYYY-MM-DD`).
  pub fn parse(begin: &str, end: &str) -> Result<Self> {
    Self::new(parse_date(begin)?, parse_date(end)?)
  }

  pub fn begin(&self) -> NaiveDate {
    self.begin
  }

  pub fn end(&self) -> NaiveDate {
    self.end
  }

  pub fn contains(&self, date: NaiveDate) -> bool {
    self.begin <= date && date <= self.end
  }
}

impl Display for DateRange {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "(begin={}, end={})", self.begin, self.end)
  }
}

/// Calendar day from its ISO representation (`YYYY-MM-DD`).
pub fn parse_date(value: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(value, ISO_FORMAT).map_err(|err| {
    PortanError::validation(format!(
      "cannot parse date; {value:?} is not a valid ISO date ({err})"
    ))
  })
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::parse_date;
  use super::DateRange;
  use crate::error::ErrorKind;

  #[test]
  fn parse_accepts_iso_dates() {
    let range = DateRange::parse("2021-01-04", "2021-03-31").unwrap();
    assert_eq!(range.begin(), NaiveDate::from_ymd_opt(2021, 1, 4).unwrap());
    assert!(range.contains(NaiveDate::from_ymd_opt(2021, 3, 31).unwrap()));
    assert!(!range.contains(NaiveDate::from_ymd_opt(2021, 4, 1).unwrap()));
    assert_eq!(range.to_string(), "(begin=2021-01-04, end=2021-03-31)");
  }

  #[test]
  fn single_day_range_is_valid() {
    assert!(DateRange::parse("2020-02-29", "2020-02-29").is_ok());
  }

  #[test]
  fn invalid_dates_are_rejected() {
    assert_eq!(parse_date("2021-02-30").unwrap_err().kind(), ErrorKind::Validation);
    assert!(parse_date("04/01/2021").is_err());
    assert!(DateRange::parse("2021-01-05", "2021-01-04").is_err());
  }
}
