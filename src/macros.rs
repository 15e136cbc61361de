//! # Macros
//!
//! $$
//! \text{scalar!} : (\text{name}, p : \mathbb{R} \to \{0, 1\}) \mapsto \{x \in \mathbb{R} : p(x)\}
//! $$
//!

/// Defines an immutable `f64` newtype whose constructor checks `$check` once.
///
/// The generated type is `Copy`, compares and hashes by value, and converts
/// back into `f64` losslessly. `TryFrom<f64>` forwards to `new`, which lets the
/// generic containers build sequences of any scalar from raw floats.
macro_rules! scalar {
  (
    $(#[$meta:meta])*
    $name:ident, |$v:ident| $check:expr, $reason:literal
  ) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub struct $name(f64);

    impl $name {
      #[doc = concat!("Build a [`", stringify!($name), "`], failing unless the value ", $reason, ".")]
      pub fn new(value: f64) -> $crate::error::Result<Self> {
        let $v = value;
        if $check {
          Ok(Self(value))
        } else {
          Err($crate::error::PortanError::validation(format!(
            "cannot instantiate {}; value must {} (got {})",
            stringify!($name),
            $reason,
            value
          )))
        }
      }

      /// Underlying floating-point value.
      pub fn value(self) -> f64 {
        self.0
      }
    }

    impl Eq for $name {}

    impl std::hash::Hash for $name {
      fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        ordered_float::OrderedFloat(self.0).hash(state)
      }
    }

    impl std::fmt::Display for $name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
      }
    }

    impl From<$name> for f64 {
      fn from(value: $name) -> f64 {
        value.0
      }
    }

    impl TryFrom<f64> for $name {
      type Error = $crate::error::PortanError;

      fn try_from(value: f64) -> $crate::error::Result<Self> {
        Self::new(value)
      }
    }
  };
}
