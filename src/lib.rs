//! # portan
//!
//! $$
//! \min_{\mathbf{w}} \ \mathbf{w}^\top \Sigma \mathbf{w}
//! \quad \text{s.t.} \quad \mathbf{1}^\top \mathbf{w} = 1,\ 0 \le w_i \le 1,\ \mu^\top \mathbf{w} \ge r_{\min}
//! $$
//!
//! Portfolio analytics from historical prices: continuous growth rates, sample
//! statistics, and a mean-variance allocation solved as a quadratic program.
//!
//! The crate is layered leaves first:
//! - [`utilities`]: validated scalars and immutable containers,
//! - [`library`]: statistics, the quadratic-program model, solvers and the optimiser,
//! - [`source`]: the price-source boundary (date ranges, dated price series),
//! - [`api`]: instrument, portfolio and optimisation facades.

#[macro_use]
mod macros;

pub mod api;
pub mod error;
pub mod library;
pub mod source;
pub mod utilities;

pub use error::ErrorKind;
pub use error::PortanError;
pub use error::Result;
pub use error::ResultExt;
