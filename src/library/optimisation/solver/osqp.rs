//! # OSQP
//!
//! $$
//! \min_x \tfrac12 x^\top P x + q^\top x \quad \text{s.t.} \quad l \le A x \le u
//! $$
//!
//! Adapter to the operator-splitting QP solver. Equalities become rows with
//! `l = u = b`, inequalities rows with `l = -inf`, `u = b`.

use std::borrow::Cow;

use ::osqp::CscMatrix;
use ::osqp::Problem;
use ::osqp::Settings;
use ::osqp::Status;
use ndarray::concatenate;
use ndarray::Array2;
use ndarray::Axis;
use tracing::debug;
use tracing::trace;
use tracing::warn;

use super::QuadraticSolver;
use crate::error::PortanError;
use crate::error::Result;
use crate::error::ResultExt;
use crate::library::optimisation::QuadraticProgram;
use crate::utilities::PositiveFinite;

/// Settings forwarded to the backend on every solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OsqpSettings {
  pub absolute_tolerance: f64,
  pub relative_tolerance: f64,
  pub maximum_iteration: u32,
  pub polish: bool,
  pub verbose: bool,
}

impl Default for OsqpSettings {
  fn default() -> Self {
    Self {
      absolute_tolerance: 1e-6,
      relative_tolerance: 1e-6,
      maximum_iteration: 1_000_000,
      polish: true,
      verbose: false,
    }
  }
}

/// [`QuadraticSolver`] backed by OSQP. The backend workspace is created and
/// dropped within each solve.
#[derive(Clone, Debug)]
pub struct OsqpSolver {
  settings: OsqpSettings,
}

impl OsqpSolver {
  pub fn new(settings: OsqpSettings) -> Result<Self> {
    PositiveFinite::new(settings.absolute_tolerance)
      .context("cannot instantiate OsqpSolver; absolute tolerance")?;
    PositiveFinite::new(settings.relative_tolerance)
      .context("cannot instantiate OsqpSolver; relative tolerance")?;
    if settings.maximum_iteration == 0 {
      return Err(PortanError::validation(
        "cannot instantiate OsqpSolver; iterations must be strictly positive",
      ));
    }
    Ok(Self { settings })
  }

  pub fn settings(&self) -> &OsqpSettings {
    &self.settings
  }

  fn backend_settings(&self) -> Settings {
    Settings::default()
      .eps_abs(self.settings.absolute_tolerance)
      .eps_rel(self.settings.relative_tolerance)
      .max_iter(self.settings.maximum_iteration)
      .polish(self.settings.polish)
      .verbose(self.settings.verbose)
  }
}

impl Default for OsqpSolver {
  fn default() -> Self {
    Self {
      settings: OsqpSettings::default(),
    }
  }
}

impl QuadraticSolver for OsqpSolver {
  fn solve_raw(&self, program: &QuadraticProgram) -> Result<Vec<f64>> {
    let adapter = ProgramAdapter::new(program);
    let a = adapter.a_mat()?;
    let (l, u) = (adapter.l_vec(), adapter.u_vec());
    let q = adapter.q_vec().unwrap_or_else(|| vec![0.0; program.n()]);
    trace!(n = program.n(), m = a.nrows, "marshalled program");

    let mut problem = Problem::new(adapter.p_mat(), &q, a, &l, &u, &self.backend_settings())
      .map_err(|err| PortanError::solver(format!("cannot solve; unable to setup solver ({err:?})")))?;

    match problem.solve() {
      Status::Solved(solution) => {
        debug!(n = program.n(), "program solved");
        Ok(solution.x().to_vec())
      }
      Status::PrimalInfeasible(_)
      | Status::PrimalInfeasibleInaccurate(_)
      | Status::DualInfeasible(_)
      | Status::DualInfeasibleInaccurate(_) => {
        warn!(n = program.n(), "program appears infeasible");
        Err(PortanError::infeasible("cannot solve; program appears infeasible"))
      }
      Status::SolvedInaccurate(_) => Err(unsolved("solved inaccurately")),
      Status::MaxIterationsReached(_) => Err(unsolved("maximum iterations reached")),
      Status::TimeLimitReached(_) => Err(unsolved("time limit reached")),
      _ => Err(unsolved("unsolved")),
    }
  }
}

fn unsolved(status: &str) -> PortanError {
  debug!(status, "solver ended without a solution");
  PortanError::solver(format!("cannot solve; solver ended with status [{status}]"))
}

/// Marshals a [`QuadraticProgram`] into OSQP's `P, q, A, l, u`.
pub(crate) struct ProgramAdapter<'a> {
  program: &'a QuadraticProgram,
}

impl<'a> ProgramAdapter<'a> {
  pub(crate) fn new(program: &'a QuadraticProgram) -> Self {
    Self { program }
  }

  /// Upper triangle of the quadratic term.
  pub(crate) fn p_mat(&self) -> CscMatrix<'static> {
    to_csc(&self.program.quadratic().to_array(), true)
  }

  pub(crate) fn q_vec(&self) -> Option<Vec<f64>> {
    self.program.linear().map(|linear| linear.to_floats())
  }

  /// Equality rows stacked above inequality rows.
  pub(crate) fn a_mat(&self) -> Result<CscMatrix<'static>> {
    let constraints = self.program.constraints();
    let equalities = constraints.equalities().coefficient_array();
    let inequalities = constraints.inequalities().coefficient_array();
    let stacked = concatenate(Axis(0), &[equalities.view(), inequalities.view()])
      .map_err(|err| PortanError::solver(format!("cannot solve; unable to stack constraints ({err})")))?;
    Ok(to_csc(&stacked, false))
  }

  pub(crate) fn l_vec(&self) -> Vec<f64> {
    let constraints = self.program.constraints();
    let mut l = constraints.equalities().bound_array().to_vec();
    l.extend(std::iter::repeat(f64::NEG_INFINITY).take(constraints.inequalities().len()));
    l
  }

  pub(crate) fn u_vec(&self) -> Vec<f64> {
    let constraints = self.program.constraints();
    let mut u = constraints.equalities().bound_array().to_vec();
    u.extend(constraints.inequalities().bound_array().iter().copied());
    u
  }
}

/// Column-compressed copy of `dense`, dropping zeros. With `upper`, entries
/// below the diagonal are dropped too.
fn to_csc(dense: &Array2<f64>, upper: bool) -> CscMatrix<'static> {
  let (nrows, ncols) = dense.dim();
  let mut indptr = Vec::with_capacity(ncols + 1);
  let mut indices = Vec::new();
  let mut data = Vec::new();

  indptr.push(0);
  for j in 0..ncols {
    let last = if upper { (j + 1).min(nrows) } else { nrows };
    for i in 0..last {
      let value = dense[[i, j]];
      if value != 0.0 {
        indices.push(i);
        data.push(value);
      }
    }
    indptr.push(data.len());
  }

  CscMatrix {
    nrows,
    ncols,
    indptr: Cow::Owned(indptr),
    indices: Cow::Owned(indices),
    data: Cow::Owned(data),
  }
}

#[cfg(test)]
fn to_dense(csc: &CscMatrix<'_>) -> Array2<f64> {
  let mut dense = Array2::zeros((csc.nrows, csc.ncols));
  for j in 0..csc.ncols {
    for k in csc.indptr[j]..csc.indptr[j + 1] {
      dense[[csc.indices[k], j]] = csc.data[k];
    }
  }
  dense
}
