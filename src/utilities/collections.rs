//! # Collections
//!
//! $$
//! \text{Symmetric} \subset \text{Square} \subset \text{Matrix} = \text{Sequence}(\text{Sequence}(T))
//! $$
//!
//! Immutable containers with shape invariants checked once at construction.

mod matrix;
mod sequence;

pub use matrix::Matrix;
pub use matrix::SquareMatrix;
pub use matrix::SymmetricMatrix;
pub use matrix::SYMMETRY_ABSOLUTE_TOLERANCE;
pub use matrix::SYMMETRY_RELATIVE_TOLERANCE;
pub use sequence::Sequence;
