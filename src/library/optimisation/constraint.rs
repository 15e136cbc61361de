//! # Constraint
//!
//! $$
//! a^\top x = b \quad (\text{equality}), \qquad a^\top x \le b \quad (\text{inequality})
//! $$
//!

use std::fmt::Display;
use std::marker::PhantomData;

use impl_new_derive::ImplNew;
use ndarray::Array1;
use ndarray::Array2;

use super::coefficient::CoefficientMatrix;
use super::coefficient::CoefficientSequence;
use crate::error::PortanError;
use crate::error::Result;
use crate::utilities::Sequence;

scalar!(
  /// Right-hand side of a linear constraint.
  Bound,
  |v| v.is_finite(),
  "be finite"
);

pub type BoundSequence = Sequence<Bound>;

/// Linear constraint over `n` unknowns; the relation comes from the enclosing
/// [`ConstraintSequence`].
#[derive(ImplNew, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Constraint {
  pub coefficients: CoefficientSequence,
  pub bound: Bound,
}

impl Constraint {
  pub fn from_floats(coefficients: impl IntoIterator<Item = f64>, bound: f64) -> Result<Self> {
    Ok(Self::new(
      CoefficientSequence::from_floats(coefficients)?,
      Bound::new(bound)?,
    ))
  }

  /// Number of unknowns this constraint applies to.
  pub fn n(&self) -> usize {
    self.coefficients.len()
  }
}

impl Display for Constraint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "(coefficients={}, bound={})", self.coefficients, self.bound)
  }
}

/// Marker for `a·x == b` constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Equality {}

/// Marker for `a·x <= b` constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Inequality {}

/// Constraints of one relation over a shared number of unknowns `n`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConstraintSequence<K> {
  values: Sequence<Constraint>,
  n: usize,
  kind: PhantomData<K>,
}

pub type LinearEqualities = ConstraintSequence<Equality>;
pub type LinearInequalities = ConstraintSequence<Inequality>;

impl<K> ConstraintSequence<K> {
  /// Every constraint must apply to `n` unknowns. Without `n`, it is taken from
  /// the first constraint (zero when there is none).
  pub fn new(values: impl IntoIterator<Item = Constraint>, n: Option<usize>) -> Result<Self> {
    let values: Sequence<Constraint> = values.into_iter().collect();
    let n = n.unwrap_or_else(|| values.first().map(Constraint::n).unwrap_or(0));
    if values.iter().any(|c| c.n() != n) {
      return Err(PortanError::validation(format!(
        "cannot instantiate ConstraintSequence; constraints must all apply to the same n ({n})"
      )));
    }
    Ok(Self {
      values,
      n,
      kind: PhantomData,
    })
  }

  pub fn empty(n: usize) -> Self {
    Self {
      values: Sequence::empty(),
      n,
      kind: PhantomData,
    }
  }

  /// One constraint per coefficient row, paired positionally with `bounds`.
  pub fn from_floats<R>(
    coefficients: impl IntoIterator<Item = R>,
    bounds: impl IntoIterator<Item = f64>,
    n: Option<usize>,
  ) -> Result<Self>
  where
    R: IntoIterator<Item = f64>,
  {
    let rows: Vec<R> = coefficients.into_iter().collect();
    let bounds: Vec<f64> = bounds.into_iter().collect();
    if rows.len() != bounds.len() {
      return Err(PortanError::validation(format!(
        "cannot instantiate ConstraintSequence; length of coefficients ({}) must be equal to length of bounds ({})",
        rows.len(),
        bounds.len()
      )));
    }
    let values = rows
      .into_iter()
      .zip(bounds)
      .map(|(row, bound)| Constraint::from_floats(row, bound))
      .collect::<Result<Vec<_>>>()?;
    Self::new(values, n)
  }

  /// Number of unknowns constrained by this sequence.
  pub fn n(&self) -> usize {
    self.n
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Constraint> {
    self.values.iter()
  }

  pub fn coefficients(&self) -> Result<CoefficientMatrix> {
    CoefficientMatrix::new(self.values.iter().map(|c| c.coefficients.clone()))
  }

  pub fn bounds(&self) -> BoundSequence {
    self.values.map(|c| c.bound)
  }

  /// Coefficients as a dense `len x n` array, correctly shaped when empty.
  pub fn coefficient_array(&self) -> Array2<f64> {
    Array2::from_shape_fn((self.len(), self.n), |(i, j)| {
      self.values[i].coefficients[j].value()
    })
  }

  pub fn bound_array(&self) -> Array1<f64> {
    self.bounds().to_array()
  }
}

impl<K> Display for ConstraintSequence<K> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "(n={}, values={})", self.n, self.values)
  }
}

/// Equalities and inequalities over the same unknowns.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LinearConstraints {
  equalities: LinearEqualities,
  inequalities: LinearInequalities,
}

impl LinearConstraints {
  pub fn new(equalities: LinearEqualities, inequalities: LinearInequalities) -> Result<Self> {
    if equalities.n() != inequalities.n() {
      return Err(PortanError::validation(format!(
        "cannot instantiate LinearConstraints; equalities and inequalities must have the same n ({} vs {})",
        equalities.n(),
        inequalities.n()
      )));
    }
    Ok(Self {
      equalities,
      inequalities,
    })
  }

  pub fn empty(n: usize) -> Self {
    Self {
      equalities: LinearEqualities::empty(n),
      inequalities: LinearInequalities::empty(n),
    }
  }

  pub fn n(&self) -> usize {
    self.equalities.n()
  }

  pub fn equalities(&self) -> &LinearEqualities {
    &self.equalities
  }

  pub fn inequalities(&self) -> &LinearInequalities {
    &self.inequalities
  }
}

impl Display for LinearConstraints {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(
      f,
      "(equalities={}, inequalities={})",
      self.equalities, self.inequalities
    )
  }
}
