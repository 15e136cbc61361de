//! # Library
//!
//! $$
//! P \xrightarrow{\ \ln\ } R \xrightarrow{\ \mu,\ \Sigma\ } \text{QP} \xrightarrow{\ \text{solve}\ } \mathbf{w}
//! $$
//!
//! Statistics over price and growth-rate series, the quadratic-program model and
//! the mean-variance optimiser built on top of it.

pub mod brownian;
pub mod frequency;
pub mod mean;
pub mod mvo;
pub mod optimisation;
pub mod price;
pub mod rate;
pub mod scatter;
pub mod weight;
pub mod weighted;

pub use brownian::ArithmeticBrownian;
pub use brownian::BrownianConverter;
pub use frequency::Frequency;
pub use mean::Mean;
pub use mean::MeanSequence;
pub use mvo::DefaultProgramFactory;
pub use mvo::MeanVarianceOptimiser;
pub use mvo::MvoProgramFactory;
pub use optimisation::OsqpSettings;
pub use optimisation::OsqpSolver;
pub use optimisation::QuadraticProgram;
pub use optimisation::QuadraticSolver;
pub use price::Price;
pub use price::PriceMatrix;
pub use price::PriceSequence;
pub use rate::Rate;
pub use rate::RateMatrix;
pub use rate::RateSequence;
pub use scatter::Correlation;
pub use scatter::CorrelationMatrix;
pub use scatter::Covariance;
pub use scatter::CovarianceMatrix;
pub use scatter::Dispersion;
pub use scatter::Variance;
pub use weight::BalancedWeights;
pub use weight::Weight;
pub use weight::WeightSequence;
pub use weighted::Weighted;
