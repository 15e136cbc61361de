//! # Scalars
//!
//! $$
//! \text{PositiveFinite} \subset \text{Finite} \subset \text{NonNan} \subset \mathbb{R} \cup \{\pm\infty\}
//! $$
//!
//! Base validated floating-point values. Domain scalars (prices, rates, means,
//! correlations, ...) live next to the statistics that produce them.

scalar!(
  /// Floating-point number which is neither infinite nor NaN.
  Finite,
  |v| v.is_finite(),
  "be finite"
);

scalar!(
  /// Floating-point number which isn't NaN. Infinities are allowed.
  NonNan,
  |v| !v.is_nan(),
  "not be NaN"
);

scalar!(
  /// Strictly positive finite floating-point number.
  PositiveFinite,
  |v| v.is_finite() && v > 0.0,
  "be finite and strictly positive"
);

impl From<PositiveFinite> for Finite {
  fn from(value: PositiveFinite) -> Self {
    Self(value.value())
  }
}

impl From<Finite> for NonNan {
  fn from(value: Finite) -> Self {
    Self(value.value())
  }
}
