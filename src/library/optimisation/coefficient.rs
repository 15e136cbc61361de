use crate::utilities::Matrix;
use crate::utilities::Sequence;

scalar!(
  /// Coefficient of an unknown in an objective or a constraint.
  Coefficient,
  |v| v.is_finite(),
  "be finite"
);

pub type CoefficientSequence = Sequence<Coefficient>;
pub type CoefficientMatrix = Matrix<Coefficient>;
