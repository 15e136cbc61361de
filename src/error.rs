//! # Errors
//!
//! $$
//! \mathcal{E} = \{\text{validation}, \text{domain}, \text{infeasible}, \text{solver}, \text{overflow}, \text{source}\}
//! $$
//!
//! Every fallible operation of the crate returns [`PortanError`]. Callers branch on
//! [`PortanError::kind`] rather than on message text, e.g. to suggest a lower
//! minimum return when a program is infeasible.

use std::fmt::Display;

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PortanError>;

/// Kind of a [`PortanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  /// A scalar or container invariant was violated at construction.
  Validation,
  /// A derived computation is mathematically undefined.
  Domain,
  /// The optimisation program has no feasible point.
  Infeasible,
  /// The solver terminated without a definitive answer.
  Solver,
  /// A numeric conversion left the representable range.
  Overflow,
  /// A price source failed to deliver usable prices.
  Source,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortanError {
  #[error("validation error: {0}")]
  Validation(String),

  #[error("undefined computation: {0}")]
  Domain(String),

  #[error("infeasible program: {0}")]
  Infeasible(String),

  #[error("solver error: {0}")]
  Solver(String),

  #[error("overflow: {0}")]
  Overflow(String),

  #[error("source error: {0}")]
  Source(String),
}

impl PortanError {
  pub fn validation(msg: impl Into<String>) -> Self {
    Self::Validation(msg.into())
  }

  pub fn domain(msg: impl Into<String>) -> Self {
    Self::Domain(msg.into())
  }

  pub fn infeasible(msg: impl Into<String>) -> Self {
    Self::Infeasible(msg.into())
  }

  pub fn solver(msg: impl Into<String>) -> Self {
    Self::Solver(msg.into())
  }

  pub fn overflow(msg: impl Into<String>) -> Self {
    Self::Overflow(msg.into())
  }

  pub fn source(msg: impl Into<String>) -> Self {
    Self::Source(msg.into())
  }

  /// Kind of this error.
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::Validation(_) => ErrorKind::Validation,
      Self::Domain(_) => ErrorKind::Domain,
      Self::Infeasible(_) => ErrorKind::Infeasible,
      Self::Solver(_) => ErrorKind::Solver,
      Self::Overflow(_) => ErrorKind::Overflow,
      Self::Source(_) => ErrorKind::Source,
    }
  }

  /// Message carried by this error, without the kind prefix.
  pub fn message(&self) -> &str {
    match self {
      Self::Validation(msg)
      | Self::Domain(msg)
      | Self::Infeasible(msg)
      | Self::Solver(msg)
      | Self::Overflow(msg)
      | Self::Source(msg) => msg,
    }
  }

  /// Prefix the message with `context`, keeping the kind.
  pub fn context(self, context: impl Display) -> Self {
    let wrap = |msg: String| format!("{context}; {msg}");
    match self {
      Self::Validation(msg) => Self::Validation(wrap(msg)),
      Self::Domain(msg) => Self::Domain(wrap(msg)),
      Self::Infeasible(msg) => Self::Infeasible(wrap(msg)),
      Self::Solver(msg) => Self::Solver(wrap(msg)),
      Self::Overflow(msg) => Self::Overflow(wrap(msg)),
      Self::Source(msg) => Self::Source(wrap(msg)),
    }
  }
}

/// Context helpers for [`Result`].
pub trait ResultExt<T> {
  /// Prefix the error message with `context`.
  fn context<C: Display>(self, context: C) -> Result<T>;

  /// Prefix the error message with a lazily built context.
  fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
  fn context<C: Display>(self, context: C) -> Result<T> {
    self.map_err(|err| err.context(context))
  }

  fn with_context<C: Display, F: FnOnce() -> C>(self, f: F) -> Result<T> {
    self.map_err(|err| err.context(f()))
  }
}

#[cfg(test)]
mod tests {
  use super::ErrorKind;
  use super::PortanError;
  use super::ResultExt;

  #[test]
  fn context_keeps_kind_and_prefixes_message() {
    let res: super::Result<()> = Err(PortanError::infeasible("no point satisfies constraints"));
    let err = res.context("cannot optimise").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Infeasible);
    assert_eq!(err.message(), "cannot optimise; no point satisfies constraints");
    assert_eq!(
      err.to_string(),
      "infeasible program: cannot optimise; no point satisfies constraints"
    );
  }

  #[test]
  fn with_context_is_lazy_on_success() {
    let res: super::Result<u8> = Ok(3);
    let value = res
      .with_context(|| -> String { panic!("context must not be built") })
      .unwrap();
    assert_eq!(value, 3);
  }

  #[test]
  fn kinds_are_distinct() {
    let kinds = [
      PortanError::validation("a").kind(),
      PortanError::domain("a").kind(),
      PortanError::infeasible("a").kind(),
      PortanError::solver("a").kind(),
      PortanError::overflow("a").kind(),
      PortanError::source("a").kind(),
    ];
    for (i, a) in kinds.iter().enumerate() {
      for b in &kinds[i + 1..] {
        assert_ne!(a, b);
      }
    }
  }
}
