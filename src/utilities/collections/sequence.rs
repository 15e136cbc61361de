use std::fmt::Display;
use std::ops::Index;

use ndarray::Array1;

use crate::error::PortanError;
use crate::error::Result;

/// Immutable, order-significant sequence. Equality and hashing derive from contents.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
  values: Vec<T>,
}

impl<T> Sequence<T> {
  pub fn new(values: impl IntoIterator<Item = T>) -> Self {
    Self {
      values: values.into_iter().collect(),
    }
  }

  pub fn empty() -> Self {
    Self { values: Vec::new() }
  }

  /// Build a sequence of validated scalars from raw floats, failing on the first
  /// value rejected by `T`.
  pub fn from_floats(values: impl IntoIterator<Item = f64>) -> Result<Self>
  where
    T: TryFrom<f64, Error = PortanError>,
  {
    values
      .into_iter()
      .map(T::try_from)
      .collect::<Result<Vec<_>>>()
      .map(|values| Self { values })
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  pub fn get(&self, index: usize) -> Option<&T> {
    self.values.get(index)
  }

  pub fn first(&self) -> Option<&T> {
    self.values.first()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.values.iter()
  }

  pub fn as_slice(&self) -> &[T] {
    &self.values
  }

  /// New sequence with `value` appended.
  pub fn with(&self, value: T) -> Self
  where
    T: Clone,
  {
    Self::new(self.values.iter().cloned().chain(std::iter::once(value)))
  }

  pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Sequence<U> {
    Sequence::new(self.values.iter().map(f))
  }

  pub fn into_vec(self) -> Vec<T> {
    self.values
  }
}

impl<T: Copy + Into<f64>> Sequence<T> {
  /// Values as raw floats.
  pub fn to_floats(&self) -> Vec<f64> {
    self.values.iter().map(|&v| v.into()).collect()
  }

  pub fn to_array(&self) -> Array1<f64> {
    self.values.iter().map(|&v| v.into()).collect()
  }
}

impl<T> Default for Sequence<T> {
  fn default() -> Self {
    Self::empty()
  }
}

impl<T> Index<usize> for Sequence<T> {
  type Output = T;

  fn index(&self, index: usize) -> &T {
    &self.values[index]
  }
}

impl<T> FromIterator<T> for Sequence<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self::new(iter)
  }
}

impl<T> IntoIterator for Sequence<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<T>;

  fn into_iter(self) -> Self::IntoIter {
    self.values.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
  type Item = &'a T;
  type IntoIter = std::slice::Iter<'a, T>;

  fn into_iter(self) -> Self::IntoIter {
    self.values.iter()
  }
}

impl<T: Display> Display for Sequence<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "(")?;
    for (i, value) in self.values.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{value}")?;
    }
    write!(f, ")")
  }
}
