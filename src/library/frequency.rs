//! # Frequency
//!
//! $$
//! \mu_{to} = \mu_{from} \frac{f_{from}}{f_{to}}, \qquad \sigma_{to} = \sigma_{from} \sqrt{\frac{f_{from}}{f_{to}}}
//! $$
//!

use std::fmt::Display;

/// Sampling frequency of observations, as periods per year.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Frequency {
  Annual,
  Monthly,
  #[default]
  Daily,
}

impl Frequency {
  /// Number of observations per year (trading days for [`Frequency::Daily`]).
  pub fn periods(self) -> f64 {
    match self {
      Frequency::Annual => 1.0,
      Frequency::Monthly => 12.0,
      Frequency::Daily => 252.0,
    }
  }

  /// Multiplier applied to a mean when converting from `from` to `to`.
  pub fn factor(from: Frequency, to: Frequency) -> f64 {
    from.periods() / to.periods()
  }
}

impl Display for Frequency {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Frequency::Annual => write!(f, "ANNUAL"),
      Frequency::Monthly => write!(f, "MONTHLY"),
      Frequency::Daily => write!(f, "DAILY"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::Frequency;

  #[test]
  fn daily_to_annual_scales_by_trading_days() {
    assert_eq!(Frequency::factor(Frequency::Daily, Frequency::Annual), 252.0);
    assert_eq!(Frequency::factor(Frequency::Annual, Frequency::Monthly), 1.0 / 12.0);
    assert_eq!(Frequency::factor(Frequency::Daily, Frequency::Daily), 1.0);
  }
}
