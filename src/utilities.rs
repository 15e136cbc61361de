//! # Utilities
//!
//! $$
//! \mathbb{F} = \{x \in \mathbb{R} : |x| < \infty\}
//! $$
//!
//! Validated scalars and the immutable containers every other layer is built on.

pub mod collections;
pub mod scalar;

pub use collections::Matrix;
pub use collections::Sequence;
pub use collections::SquareMatrix;
pub use collections::SymmetricMatrix;
pub use scalar::Finite;
pub use scalar::NonNan;
pub use scalar::PositiveFinite;
