//! # Quadratic solver
//!
//! $$
//! \mathcal{S} : \text{QP}_n \to \mathbb{F}^n \cup \{\text{infeasible}, \text{failure}\}
//! $$
//!

pub mod osqp;

use tracing::debug;

use super::program::QuadraticProgram;
use crate::error::PortanError;
use crate::error::Result;
use crate::utilities::Finite;
use crate::utilities::Sequence;

/// Backend able to minimise a [`QuadraticProgram`].
pub trait QuadraticSolver {
  /// Raw optimum reported by the backend. Only called for `n > 0`.
  fn solve_raw(&self, program: &QuadraticProgram) -> Result<Vec<f64>>;

  /// Optimum as finite values, one per unknown.
  ///
  /// Zero-dimensional programs resolve to an empty solution without reaching
  /// the backend. Non-finite entries are a solver error.
  fn solve(&self, program: &QuadraticProgram) -> Result<Sequence<Finite>> {
    if program.n() == 0 {
      debug!("zero-dimensional program, skipping backend");
      return Ok(Sequence::empty());
    }
    let raw = self.solve_raw(program)?;
    if raw.len() != program.n() {
      return Err(PortanError::solver(format!(
        "cannot solve; backend returned {} values for {} unknowns",
        raw.len(),
        program.n()
      )));
    }
    raw
      .into_iter()
      .map(|x| {
        Finite::new(x).map_err(|_| {
          PortanError::solver(format!("cannot solve; solution contains a non-finite value ({x})"))
        })
      })
      .collect()
  }
}

impl<S: QuadraticSolver + ?Sized> QuadraticSolver for &S {
  fn solve_raw(&self, program: &QuadraticProgram) -> Result<Vec<f64>> {
    (**self).solve_raw(program)
  }
}


#[cfg(test)]
mod tests {
  use super::testing::FailingSolver;
  use super::testing::FixedSolver;
  use super::QuadraticSolver;
  use crate::error::ErrorKind;
  use crate::error::PortanError;
  use crate::library::optimisation::LinearConstraints;
  use crate::library::optimisation::QuadraticCoefficients;
  use crate::library::optimisation::QuadraticProgram;

  fn program(n: usize) -> QuadraticProgram {
    let rows = (0..n).map(|i| (0..n).map(move |j| if i == j { 1.0 } else { 0.0 }));
    QuadraticProgram::new(
      QuadraticCoefficients::from_floats(rows).unwrap(),
      LinearConstraints::empty(n),
      None,
    )
    .unwrap()
  }

  #[test]
  fn zero_dimensional_program_skips_backend() {
    let solver = FixedSolver::new(vec![1.0]);
    assert!(solver.solve(&program(0)).unwrap().is_empty());
    assert_eq!(solver.calls(), 0);
  }

  #[test]
  fn raw_values_become_finite() {
    let solver = FixedSolver::new(vec![0.25, 0.75]);
    let x = solver.solve(&program(2)).unwrap();
    assert_eq!(x.to_floats(), vec![0.25, 0.75]);
    assert_eq!(solver.calls(), 1);
  }

  #[test]
  fn non_finite_values_are_solver_errors() {
    let solver = FixedSolver::new(vec![f64::NAN, 1.0]);
    assert_eq!(solver.solve(&program(2)).unwrap_err().kind(), ErrorKind::Solver);

    let solver = FixedSolver::new(vec![1.0]);
    assert_eq!(solver.solve(&program(2)).unwrap_err().kind(), ErrorKind::Solver);
  }

  #[test]
  fn backend_errors_keep_their_kind() {
    let solver = FailingSolver(PortanError::infeasible("no point"));
    assert_eq!((&solver).solve(&program(1)).unwrap_err().kind(), ErrorKind::Infeasible);
  }
}
