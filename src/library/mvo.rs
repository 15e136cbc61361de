//! # Mean-variance optimisation
//!
//! $$
//! \min_{\mathbf{w}} \mathbf{w}^\top \Sigma \mathbf{w}
//! \quad \text{s.t.} \quad \mathbf{1}^\top \mathbf{w} = 1,\quad
//! I\mathbf{w} \le \mathbf{1},\quad -I\mathbf{w} \le \mathbf{0},\quad
//! -\bar{\mathbf{r}}^\top \mathbf{w} \le -r_{\min}
//! $$
//!

use ndarray::concatenate;
use ndarray::Array1;
use ndarray::Array2;
use ndarray::Axis;
use tracing::debug;

use super::optimisation::LinearConstraints;
use super::optimisation::LinearEqualities;
use super::optimisation::LinearInequalities;
use super::optimisation::OsqpSolver;
use super::optimisation::QuadraticCoefficients;
use super::optimisation::QuadraticProgram;
use super::optimisation::QuadraticSolver;
use super::rate::Rate;
use super::rate::RateMatrix;
use super::weight::Weight;
use super::weight::WeightSequence;
use crate::error::PortanError;
use crate::error::Result;
use crate::error::ResultExt;

/// Builds the quadratic program of a mean-variance optimisation.
pub trait MvoProgramFactory {
  /// Program over the rows of `rates` (one row per instrument) requiring an
  /// expected rate of at least `minimum`.
  fn program(&self, rates: &RateMatrix, minimum: Rate) -> Result<QuadraticProgram>;
}

/// Long-only, fully invested, minimum-variance program with a floor on the mean.
#[derive(Default, Clone, Copy, Debug)]
pub struct DefaultProgramFactory;

impl MvoProgramFactory for DefaultProgramFactory {
  fn program(&self, rates: &RateMatrix, minimum: Rate) -> Result<QuadraticProgram> {
    let n = rates.nrows();
    let means = rates.means()?.to_array();
    let covariances = rates.covariances()?.to_floats();
    debug!(n, minimum = minimum.value(), "building mean-variance program");

    let quadratic = QuadraticCoefficients::from_floats(covariances)
      .context("cannot build mean-variance program; covariances must be finite")?;

    let equalities = LinearEqualities::from_floats([vec![1.0; n]], [1.0], Some(n))?;

    let identity = Array2::<f64>::eye(n);
    let negated = -&identity;
    let floor = (-&means).insert_axis(Axis(0));
    let coefficients = concatenate(Axis(0), &[identity.view(), negated.view(), floor.view()])
      .map_err(|err| PortanError::validation(format!("cannot build mean-variance program; {err}")))?;
    let bounds = concatenate(
      Axis(0),
      &[
        Array1::<f64>::ones(n).view(),
        Array1::<f64>::zeros(n).view(),
        Array1::from_elem(1, -minimum.value()).view(),
      ],
    )
    .map_err(|err| PortanError::validation(format!("cannot build mean-variance program; {err}")))?;

    let inequalities = LinearInequalities::from_floats(
      coefficients.rows().into_iter().map(|row| row.to_vec()),
      bounds.to_vec(),
      Some(n),
    )
    .context("cannot build mean-variance program; means must be finite")?;

    QuadraticProgram::new(quadratic, LinearConstraints::new(equalities, inequalities)?, None)
  }
}

/// Minimises the variance of a weighted sum of rate rows subject to a floor on
/// its mean.
#[derive(Clone, Debug)]
pub struct MeanVarianceOptimiser<F = DefaultProgramFactory, S = OsqpSolver> {
  factory: F,
  solver: S,
}

impl<S: QuadraticSolver> MeanVarianceOptimiser<DefaultProgramFactory, S> {
  pub fn with_solver(solver: S) -> Self {
    Self::new(DefaultProgramFactory, solver)
  }
}

impl Default for MeanVarianceOptimiser {
  fn default() -> Self {
    Self::with_solver(OsqpSolver::default())
  }
}

impl<F: MvoProgramFactory, S: QuadraticSolver> MeanVarianceOptimiser<F, S> {
  pub fn new(factory: F, solver: S) -> Self {
    Self { factory, solver }
  }

  pub fn factory(&self) -> &F {
    &self.factory
  }

  pub fn solver(&self) -> &S {
    &self.solver
  }

  /// Percentage weights aligned with the rows of `rates`.
  ///
  /// Rounding each weight to a whole percentage means the result may not sum to
  /// exactly 100.
  pub fn optimise(&self, rates: &RateMatrix, minimum: Rate) -> Result<WeightSequence> {
    debug!(instruments = rates.nrows(), "mean-variance optimisation");
    let program = self.factory.program(rates, minimum)?;
    let solution = self.solver.solve(&program).context("cannot optimise")?;
    solution
      .iter()
      .map(|x| Weight::from_float(x.value()))
      .collect::<Result<WeightSequence>>()
      .context("cannot optimise")
  }
}
