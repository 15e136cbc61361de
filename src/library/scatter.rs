//! # Scatter
//!
//! $$
//! \operatorname{Var}\Big[\sum_i f_i X_i\Big] = \mathbf{f}^\top \Sigma\, \mathbf{f}, \qquad
//! \rho_{ab} = \frac{\operatorname{Cov}(a, b)}{\sigma_a \sigma_b}
//! $$
//!
//! Dispersion, covariance and correlation scalars and their symmetric matrices.

use crate::error::PortanError;
use crate::error::Result;
use crate::utilities::Sequence;
use crate::utilities::SymmetricMatrix;

scalar!(
  /// Sample standard deviation.
  Dispersion,
  |v| !v.is_nan() && v >= 0.0,
  "be non-negative and not NaN"
);

scalar!(
  /// Joint variability of two random variables.
  Covariance,
  |v| !v.is_nan(),
  "not be NaN"
);

scalar!(
  /// Variance of a random variable.
  Variance,
  |v| !v.is_nan() && v >= 0.0,
  "be non-negative and not NaN"
);

scalar!(
  /// Pearson correlation in `[-1, 1]`.
  Correlation,
  |v| v.is_finite() && (-1.0..=1.0).contains(&v),
  "be finite and inside [-1.0, 1.0]"
);

pub type CovarianceSequence = Sequence<Covariance>;
pub type CorrelationSequence = Sequence<Correlation>;

/// Symmetric matrix of pairwise sample covariances.
pub type CovarianceMatrix = SymmetricMatrix<Covariance>;

/// Symmetric matrix of pairwise sample correlations.
pub type CorrelationMatrix = SymmetricMatrix<Correlation>;

impl Dispersion {
  pub fn zero() -> Self {
    Self(0.0)
  }

  /// Dispersion of `factor * X`, i.e. `self * sqrt(factor)`.
  pub fn scale(self, factor: f64) -> Result<Self> {
    if factor.is_nan() {
      return Err(PortanError::validation("cannot scale; factor must not be NaN"));
    }
    if factor < 0.0 {
      return Err(PortanError::validation("cannot scale; factor must be non-negative"));
    }
    Self::new(self.0 * factor.sqrt())
  }
}

impl Covariance {
  pub fn zero() -> Self {
    Self(0.0)
  }
}

impl Variance {
  pub fn to_dispersion(self) -> Dispersion {
    Dispersion(self.0.sqrt())
  }
}

impl Correlation {
  pub fn zero() -> Self {
    Self(0.0)
  }

  /// Clamp values overshooting `[-1, 1]` (floating-point drift) onto the
  /// interval. NaN and infinities are still rejected.
  pub fn robust(value: f64) -> Result<Self> {
    if value.is_finite() {
      Self::new(value.clamp(-1.0, 1.0))
    } else {
      Self::new(value)
    }
  }
}

impl SymmetricMatrix<Covariance> {
  /// Variance of `Σ factors[i] * X_i`, i.e. `fᵀ C f`.
  ///
  /// A negative quadratic form cannot come out of a genuine covariance matrix and
  /// is reported as a domain error rather than clamped.
  pub fn variance(&self, factors: &[f64]) -> Result<Variance> {
    if factors.len() != self.n() {
      return Err(PortanError::validation(format!(
        "cannot determine variance; length of factors ({}) must be equal to this matrix length ({})",
        factors.len(),
        self.n()
      )));
    }
    if factors.iter().any(|f| f.is_nan()) {
      return Err(PortanError::validation(
        "cannot determine variance; factors must not be NaN",
      ));
    }

    let f = ndarray::Array1::from(factors.to_vec());
    let value = f.dot(&self.to_array().dot(&f));

    if value < 0.0 {
      return Err(PortanError::domain(format!(
        "cannot determine variance; quadratic form is negative ({value})"
      )));
    }
    Variance::new(value)
  }
}
