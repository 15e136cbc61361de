//! # Optimisation
//!
//! $$
//! \min_{x \in \mathbb{R}^n} \tfrac12 x^\top P x + q^\top x
//! \quad \text{s.t.} \quad A_{eq} x = b_{eq},\ A_{ub} x \le b_{ub}
//! $$
//!
//! Quadratic-program model and the solvers that consume it.

pub mod coefficient;
pub mod constraint;
pub mod objective;
pub mod program;
pub mod solver;

pub use coefficient::Coefficient;
pub use coefficient::CoefficientMatrix;
pub use coefficient::CoefficientSequence;
pub use constraint::Bound;
pub use constraint::BoundSequence;
pub use constraint::Constraint;
pub use constraint::ConstraintSequence;
pub use constraint::Equality;
pub use constraint::Inequality;
pub use constraint::LinearConstraints;
pub use constraint::LinearEqualities;
pub use constraint::LinearInequalities;
pub use objective::LinearCoefficients;
pub use objective::QuadraticCoefficients;
pub use program::QuadraticProgram;
pub use solver::osqp::OsqpSettings;
pub use solver::osqp::OsqpSolver;
pub use solver::QuadraticSolver;
