//! # Arithmetic Brownian
//!
//! $$
//! dX_t = \mu\,dt + \sigma\,dW_t
//! $$
//!
//! Anything exposing a drift and a dispersion estimate, and a converter that
//! rescales both to another sampling frequency.

use super::frequency::Frequency;
use super::mean::Mean;
use super::rate::RateSequence;
use super::scatter::Dispersion;
use crate::error::Result;

/// Sampled arithmetic Brownian motion.
pub trait ArithmeticBrownian {
  /// Sample mean of the increments.
  fn mean(&self) -> Result<Mean>;

  /// Sample standard deviation of the increments.
  fn dispersion(&self) -> Result<Dispersion>;
}

impl ArithmeticBrownian for RateSequence {
  fn mean(&self) -> Result<Mean> {
    RateSequence::mean(self)
  }

  fn dispersion(&self) -> Result<Dispersion> {
    RateSequence::dispersion(self)
  }
}

/// View of `brownian` sampled at frequency `to` instead of `from`.
pub struct BrownianConverter<'a, B: ?Sized> {
  brownian: &'a B,
  from: Frequency,
  to: Frequency,
}

impl<'a, B: ArithmeticBrownian + ?Sized> BrownianConverter<'a, B> {
  pub fn new(brownian: &'a B, from: Frequency, to: Frequency) -> Self {
    Self { brownian, from, to }
  }

  fn factor(&self) -> f64 {
    Frequency::factor(self.from, self.to)
  }
}

impl<B: ArithmeticBrownian + ?Sized> ArithmeticBrownian for BrownianConverter<'_, B> {
  fn mean(&self) -> Result<Mean> {
    self.brownian.mean()?.scale(self.factor())
  }

  fn dispersion(&self) -> Result<Dispersion> {
    self.brownian.dispersion()?.scale(self.factor())
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;

  use super::ArithmeticBrownian;
  use super::BrownianConverter;
  use crate::error::PortanError;
  use crate::error::Result;
  use crate::library::Dispersion;
  use crate::library::Frequency;
  use crate::library::Mean;
  use crate::library::RateSequence;

  struct Fixed(f64, f64);

  impl ArithmeticBrownian for Fixed {
    fn mean(&self) -> Result<Mean> {
      Mean::new(self.0)
    }

    fn dispersion(&self) -> Result<Dispersion> {
      Dispersion::new(self.1)
    }
  }

  struct Broken;

  impl ArithmeticBrownian for Broken {
    fn mean(&self) -> Result<Mean> {
      Err(PortanError::domain("no mean"))
    }

    fn dispersion(&self) -> Result<Dispersion> {
      Err(PortanError::domain("no dispersion"))
    }
  }

  #[test]
  fn daily_to_annual() {
    let fixed = Fixed(0.001, 0.01);
    let annual = BrownianConverter::new(&fixed, Frequency::Daily, Frequency::Annual);
    assert_relative_eq!(annual.mean().unwrap().value(), 0.252, epsilon = 1e-15);
    assert_relative_eq!(annual.dispersion().unwrap().value(), 0.01 * 252f64.sqrt(), epsilon = 1e-15);
  }

  #[test]
  fn converters_compose() {
    let fixed = Fixed(0.12, 0.2);
    let monthly = BrownianConverter::new(&fixed, Frequency::Annual, Frequency::Monthly);
    let back = BrownianConverter::new(&monthly, Frequency::Monthly, Frequency::Annual);
    assert_relative_eq!(back.mean().unwrap().value(), 0.12, epsilon = 1e-15);
    assert_relative_eq!(back.dispersion().unwrap().value(), 0.2, epsilon = 1e-15);
  }

  #[test]
  fn errors_pass_through() {
    let converter = BrownianConverter::new(&Broken, Frequency::Daily, Frequency::Annual);
    assert!(converter.mean().is_err());
    assert!(converter.dispersion().is_err());
  }

  #[test]
  fn rate_sequence_is_brownian() {
    let rates = RateSequence::from_floats([0.01, 0.03]).unwrap();
    let annual = BrownianConverter::new(&rates, Frequency::Daily, Frequency::Annual);
    assert_relative_eq!(annual.mean().unwrap().value(), 0.02 * 252.0, epsilon = 1e-12);
  }
}
