use thiserror::Error;

/// Result type alias using the engine's `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
///
/// `RecoverableInTheory` marks a limitation of the current ideal derivation;
/// `MathematicallyImpossible` marks a potential that is not semimonomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A structural invariant of a path, cycle, quiver or permutation was violated.
    Structural,

    /// An index/count pair does not fit inside a path.
    OutOfRange,

    /// The potential is outside what the ideal derivation currently supports.
    RecoverableInTheory,

    /// The potential genuinely fails to be semimonomial.
    MathematicallyImpossible,

    /// A check that cannot fail on valid input failed. Always a defect.
    InternalInvariant,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two consecutive arrows do not meet: `previous.target != next.source`.
    #[error("Arrow {previous} at position {index} is not followed by an adjacent arrow: {next}.")]
    NonAdjacentArrows {
        index: usize,
        previous: String,
        next: String,
    },

    /// A path was requested from an empty arrow list, so its starting point is unknown.
    #[error("Cannot build a path from an empty arrow sequence.")]
    EmptyArrowSequence,

    #[error("Cannot build a path from an empty vertex sequence.")]
    EmptyVertexSequence,

    /// An arrow or path was attached at a vertex other than the one it must start or end at.
    #[error("Endpoint mismatch: expected vertex {expected}, found {actual}.")]
    EndpointMismatch { expected: String, actual: String },

    #[error("Index {index} with count {count} is out of range for a path of length {length}.")]
    IndexOutOfRange {
        index: usize,
        count: usize,
        length: usize,
    },

    /// A coefficient left the `i64` range during scaling or addition.
    #[error("Coefficient arithmetic overflowed the 64-bit integer range.")]
    CoefficientOverflow,

    #[error("Path {0} is not closed.")]
    NotClosed(String),

    #[error("Path {0} is not simple.")]
    NotSimple(String),

    #[error("Vertex {0} occurs more than once.")]
    DuplicateVertex(String),

    #[error("Arrow {0} occurs more than once.")]
    DuplicateArrow(String),

    #[error("Vertex {0} does not belong to the quiver.")]
    VertexNotInQuiver(String),

    #[error("Arrow {0} does not belong to the quiver.")]
    ArrowNotInQuiver(String),

    #[error("Mapping is not a permutation: {0}")]
    InvalidPermutation(String),

    /// Only potentials with coefficients in {-1, +1} are supported by the ideal derivation.
    #[error("Cycle {cycle} has coefficient {coefficient}; only -1 and +1 are supported.")]
    NonUnitCoefficient { cycle: String, coefficient: i64 },

    /// Cycles passing through the same arrow twice are not supported by the ideal derivation.
    #[error("Cycle {cycle} contains arrow {arrow} more than once.")]
    RepeatedArrowInCycle { cycle: String, arrow: String },

    /// More than one cycle carries the same arrow with the same sign.
    #[error("Arrow {arrow} occurs with sign {sign:+} in more than one cycle; the potential is not semimonomial.")]
    RepeatedArrowSign { arrow: String, sign: i64 },

    #[error("Internal invariant violated: {0}")]
    InternalInvariant(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NonAdjacentArrows { .. }
            | Error::EmptyArrowSequence
            | Error::EmptyVertexSequence
            | Error::EndpointMismatch { .. }
            | Error::NotClosed(_)
            | Error::NotSimple(_)
            | Error::DuplicateVertex(_)
            | Error::DuplicateArrow(_)
            | Error::VertexNotInQuiver(_)
            | Error::ArrowNotInQuiver(_)
            | Error::InvalidPermutation(_) => ErrorKind::Structural,

            Error::IndexOutOfRange { .. } | Error::CoefficientOverflow => ErrorKind::OutOfRange,

            Error::NonUnitCoefficient { .. } | Error::RepeatedArrowInCycle { .. } => {
                ErrorKind::RecoverableInTheory
            }

            Error::RepeatedArrowSign { .. } => ErrorKind::MathematicallyImpossible,

            Error::InternalInvariant(_) => ErrorKind::InternalInvariant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn semimonomial_categories_are_distinct() {
        let limitation = Error::NonUnitCoefficient {
            cycle: "(1, 2, 1)".to_string(),
            coefficient: 2,
        };
        let impossible = Error::RepeatedArrowSign {
            arrow: "(1, 2)".to_string(),
            sign: -1,
        };

        assert_eq!(limitation.kind(), ErrorKind::RecoverableInTheory);
        assert_eq!(impossible.kind(), ErrorKind::MathematicallyImpossible);
        assert_ne!(limitation.kind(), impossible.kind());
    }

    #[test]
    fn messages_name_the_offending_values() {
        let err = Error::RepeatedArrowSign {
            arrow: "(4, 5)".to_string(),
            sign: 1,
        };
        assert_eq!(
            err.to_string(),
            "Arrow (4, 5) occurs with sign +1 in more than one cycle; the potential is not semimonomial."
        );

        let err = Error::NonAdjacentArrows {
            index: 0,
            previous: "(1, 2)".to_string(),
            next: "(3, 4)".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Arrow (1, 2) at position 0 is not followed by an adjacent arrow: (3, 4)."
        );
    }

    #[test]
    fn out_of_range_has_its_own_kind() {
        let err = Error::IndexOutOfRange {
            index: 3,
            count: 2,
            length: 4,
        };
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(Error::CoefficientOverflow.kind(), ErrorKind::OutOfRange);
    }
}
