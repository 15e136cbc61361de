use std::fmt::Display;
use std::ops::Deref;

use approx::relative_eq;
use ndarray::Array2;

use super::sequence::Sequence;
use crate::error::PortanError;
use crate::error::Result;

/// Relative tolerance used when checking `M[i][j] == M[j][i]`.
pub const SYMMETRY_RELATIVE_TOLERANCE: f64 = 1e-8;
/// Absolute tolerance used when checking `M[i][j] == M[j][i]`.
pub const SYMMETRY_ABSOLUTE_TOLERANCE: f64 = 1e-12;

/// Immutable sequence of equally long sequences (row-major).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T> {
  rows: Vec<Sequence<T>>,
}

impl<T> Matrix<T> {
  /// Build a matrix from rows, failing if the rows differ in length.
  pub fn new(rows: impl IntoIterator<Item = Sequence<T>>) -> Result<Self> {
    let rows: Vec<Sequence<T>> = rows.into_iter().collect();
    if let Some(first) = rows.first() {
      let ncols = first.len();
      if rows.iter().any(|row| row.len() != ncols) {
        return Err(PortanError::validation(
          "cannot instantiate Matrix; rows must all have the same length",
        ));
      }
    }
    Ok(Self { rows })
  }

  pub fn empty() -> Self {
    Self { rows: Vec::new() }
  }

  /// Build a matrix of validated scalars from raw float rows.
  pub fn from_floats<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
  where
    R: IntoIterator<Item = f64>,
    T: TryFrom<f64, Error = PortanError>,
  {
    let rows = rows
      .into_iter()
      .map(Sequence::from_floats)
      .collect::<Result<Vec<_>>>()?;
    Self::new(rows)
  }

  /// Number of rows.
  pub fn nrows(&self) -> usize {
    self.rows.len()
  }

  /// Number of columns; zero for a matrix without rows.
  pub fn ncols(&self) -> usize {
    self.rows.first().map(Sequence::len).unwrap_or(0)
  }

  pub fn len(&self) -> usize {
    self.rows.len()
  }

  pub fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  pub fn row(&self, index: usize) -> Option<&Sequence<T>> {
    self.rows.get(index)
  }

  pub fn get(&self, row: usize, col: usize) -> Option<&T> {
    self.rows.get(row).and_then(|r| r.get(col))
  }

  pub fn rows(&self) -> std::slice::Iter<'_, Sequence<T>> {
    self.rows.iter()
  }

  /// Columns become rows. A matrix without columns transposes to an empty matrix.
  pub fn transpose(&self) -> Self
  where
    T: Clone,
  {
    let rows = (0..self.ncols())
      .map(|j| self.rows.iter().map(|row| row[j].clone()).collect())
      .collect();
    Self { rows }
  }

  pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Matrix<U> {
    Matrix {
      rows: self.rows.iter().map(|row| row.map(&mut f)).collect(),
    }
  }
}

impl<T: Copy + Into<f64>> Matrix<T> {
  pub fn to_array(&self) -> Array2<f64> {
    Array2::from_shape_fn((self.nrows(), self.ncols()), |(i, j)| {
      self.rows[i][j].into()
    })
  }

  pub fn to_floats(&self) -> Vec<Vec<f64>> {
    self.rows.iter().map(Sequence::to_floats).collect()
  }
}

impl<T> Default for Matrix<T> {
  fn default() -> Self {
    Self::empty()
  }
}

impl<T: Display> Display for Matrix<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "(")?;
    for (i, row) in self.rows.iter().enumerate() {
      if i > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{row}")?;
    }
    write!(f, ")")
  }
}

/// Matrix with as many rows as columns. The empty matrix is square.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SquareMatrix<T> {
  matrix: Matrix<T>,
}

impl<T> SquareMatrix<T> {
  pub fn new(matrix: Matrix<T>) -> Result<Self> {
    if !matrix.is_empty() && matrix.nrows() != matrix.ncols() {
      return Err(PortanError::validation(format!(
        "cannot instantiate SquareMatrix; length of each row must match the number of rows ({}x{})",
        matrix.nrows(),
        matrix.ncols()
      )));
    }
    Ok(Self { matrix })
  }

  pub fn empty() -> Self {
    Self {
      matrix: Matrix::empty(),
    }
  }

  /// Dimension `n` of this `n x n` matrix.
  pub fn n(&self) -> usize {
    self.matrix.nrows()
  }

  pub fn as_matrix(&self) -> &Matrix<T> {
    &self.matrix
  }

  pub fn into_matrix(self) -> Matrix<T> {
    self.matrix
  }
}

impl<T: Copy + Into<f64>> SquareMatrix<T> {
  /// Verify `M[i][j] == M[j][i]` within the symmetry tolerances.
  pub fn is_symmetric(&self) -> bool {
    let n = self.n();
    for i in 0..n {
      for j in (i + 1)..n {
        let a: f64 = self.matrix.rows[i][j].into();
        let b: f64 = self.matrix.rows[j][i].into();
        if !relative_eq!(
          a,
          b,
          epsilon = SYMMETRY_ABSOLUTE_TOLERANCE,
          max_relative = SYMMETRY_RELATIVE_TOLERANCE
        ) {
          return false;
        }
      }
    }
    true
  }
}

impl<T> Deref for SquareMatrix<T> {
  type Target = Matrix<T>;

  fn deref(&self) -> &Matrix<T> {
    &self.matrix
  }
}

impl<T> Default for SquareMatrix<T> {
  fn default() -> Self {
    Self::empty()
  }
}

/// Square matrix equal to its transpose within
/// [`SYMMETRY_RELATIVE_TOLERANCE`] / [`SYMMETRY_ABSOLUTE_TOLERANCE`].
///
/// Covariance, correlation and quadratic-coefficient matrices are symmetric by
/// construction but drift from floating-point rounding, hence the tolerance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SymmetricMatrix<T> {
  square: SquareMatrix<T>,
}

impl<T: Copy + Into<f64>> SymmetricMatrix<T> {
  pub fn new(square: SquareMatrix<T>) -> Result<Self> {
    if !square.is_symmetric() {
      return Err(PortanError::validation(
        "cannot instantiate SymmetricMatrix; values must form a symmetric matrix",
      ));
    }
    Ok(Self { square })
  }

  /// Validate `rows` as rectangular, square, then symmetric.
  pub fn from_rows(rows: impl IntoIterator<Item = Sequence<T>>) -> Result<Self> {
    Self::new(SquareMatrix::new(Matrix::new(rows)?)?)
  }

  pub fn from_floats<R>(rows: impl IntoIterator<Item = R>) -> Result<Self>
  where
    R: IntoIterator<Item = f64>,
    T: TryFrom<f64, Error = PortanError>,
  {
    Self::new(SquareMatrix::new(Matrix::from_floats(rows)?)?)
  }
}

impl<T> SymmetricMatrix<T> {
  pub fn empty() -> Self {
    Self {
      square: SquareMatrix::empty(),
    }
  }

  pub fn as_square(&self) -> &SquareMatrix<T> {
    &self.square
  }

  pub fn into_matrix(self) -> Matrix<T> {
    self.square.into_matrix()
  }
}

impl<T> Deref for SymmetricMatrix<T> {
  type Target = SquareMatrix<T>;

  fn deref(&self) -> &SquareMatrix<T> {
    &self.square
  }
}

impl<T> Default for SymmetricMatrix<T> {
  fn default() -> Self {
    Self::empty()
  }
}

#[cfg(test)]
mod tests {
  use super::Matrix;
  use super::Sequence;
  use super::SquareMatrix;
  use super::SymmetricMatrix;
  use crate::error::ErrorKind;
  use crate::utilities::Finite;

  fn finite(rows: &[&[f64]]) -> Matrix<Finite> {
    Matrix::from_floats(rows.iter().map(|r| r.iter().copied())).unwrap()
  }

  #[test]
  fn matrix_rejects_ragged_rows() {
    let err = Matrix::new([Sequence::new([1, 2]), Sequence::new([3])]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.message().contains("same length"));
  }

  #[test]
  fn empty_matrix_has_no_columns() {
    let m = Matrix::<i32>::empty();
    assert_eq!((m.nrows(), m.ncols()), (0, 0));
    assert!(m.transpose().is_empty());
  }

  #[test]
  fn rows_without_columns_transpose_to_empty() {
    let m = Matrix::new([Sequence::<i32>::empty(), Sequence::empty()]).unwrap();
    assert_eq!((m.nrows(), m.ncols()), (2, 0));
    assert!(m.transpose().is_empty());
  }

  #[test]
  fn transpose_swaps_rows_and_columns() {
    let m = Matrix::new([Sequence::new([1, 2, 3]), Sequence::new([4, 5, 6])]).unwrap();
    let t = m.transpose();
    assert_eq!((t.nrows(), t.ncols()), (3, 2));
    assert_eq!(t.get(2, 1), Some(&6));
    assert_eq!(t.transpose(), m);
  }

  #[test]
  fn square_requires_matching_dimensions() {
    assert!(SquareMatrix::new(finite(&[&[1.0, 2.0]])).is_err());
    assert!(SquareMatrix::new(finite(&[])).is_ok());
    assert_eq!(SquareMatrix::new(finite(&[&[1.0]])).unwrap().n(), 1);
  }

  #[test]
  fn symmetric_accepts_rounding_drift() {
    let m = finite(&[&[1.0, 0.3], &[0.3 + 1e-12, 2.0]]);
    assert!(SymmetricMatrix::new(SquareMatrix::new(m).unwrap()).is_ok());
  }

  #[test]
  fn symmetric_rejects_asymmetric_values() {
    let m = finite(&[&[1.0, 0.3], &[0.4, 2.0]]);
    let err = SymmetricMatrix::new(SquareMatrix::new(m).unwrap()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.message().contains("symmetric"));
  }

  #[test]
  fn symmetric_from_floats_checks_every_invariant() {
    assert!(SymmetricMatrix::<Finite>::from_floats([vec![1.0, 2.0]]).is_err());
    assert!(SymmetricMatrix::<Finite>::from_floats([vec![1.0, f64::NAN], vec![f64::NAN, 1.0]]).is_err());
    let s = SymmetricMatrix::<Finite>::from_floats([vec![1.0, 2.0], vec![2.0, 1.0]]).unwrap();
    assert_eq!(s.n(), 2);
    assert_eq!(s.to_floats(), vec![vec![1.0, 2.0], vec![2.0, 1.0]]);
  }

  #[test]
  fn to_array_keeps_layout() {
    let a = finite(&[&[1.0, 2.0], &[3.0, 4.0], &[5.0, 6.0]]).to_array();
    assert_eq!(a.dim(), (3, 2));
    assert_eq!(a[[2, 0]], 5.0);
  }
}
