//! Error types used in the library.
//!
//! - Reduction errors are internally expected, and are used to control the flow of a search.
//!   An unsatisfiable formula is never reported through an error, see [Report](crate::reports::Report).
//! - Combination and encoding errors are external, and note some precondition of a scheduling problem which was not met.
//!
//! Names of the error enums overlap with the procedure or structure they are returned from.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

/// Noted errors when assuming a value for an atom.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReductionError {
    /// A unit clause requires the atom to have the opposite value.
    Conflict,

    /// Every literal of some clause was falsified by the assumption.
    EmptyClause,
}

impl std::fmt::Display for ReductionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Conflict => write!(f, "the assumption conflicts with a unit clause"),
            Self::EmptyClause => write!(f, "the assumption falsifies every literal of a clause"),
        }
    }
}

impl std::error::Error for ReductionError {}

/// Errors when requesting combinations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CombinationError {
    /// More distinct elements were requested than the bound permits.
    Bound { size: usize, bound: usize },
}

impl std::fmt::Display for CombinationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bound { size, bound } => {
                write!(f, "no combination of {size} distinct elements below {bound}")
            }
        }
    }
}

impl std::error::Error for CombinationError {}

/// Errors when encoding a scheduling problem.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EncodeError {
    /// A session was given a capacity of zero.
    ZeroCapacity(String),

    /// A student prefers a session without a capacity.
    UnknownSession { student: String, session: String },

    /// An identifier contains the separator used to name student/session atoms.
    AmbiguousName(String),

    /// Some required combination could not be made.
    Combination(CombinationError),
}

impl From<CombinationError> for EncodeError {
    fn from(e: CombinationError) -> Self {
        EncodeError::Combination(e)
    }
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCapacity(session) => write!(f, "session \"{session}\" has no capacity"),
            Self::UnknownSession { student, session } => {
                write!(f, "student \"{student}\" prefers unknown session \"{session}\"")
            }
            Self::AmbiguousName(name) => write!(f, "\"{name}\" contains the atom separator"),
            Self::Combination(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Combination(e) => Some(e),
            _ => None,
        }
    }
}
