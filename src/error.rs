//! Error types for directory naming.
//!
//! Every precondition checked by the naming functions maps to one variant
//! here, naming the invariant that was violated. There is no recovery
//! layer: callers are expected to pass already-validated domain values,
//! and these errors mark the contract-enforcement boundary.

use thiserror::Error;

/// Errors that can occur while computing a directory name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Identifier does not carry the standard canonical prefix.
    #[error("identifier '{0}' is not in standard form")]
    NonStandardIdentifier(String),

    /// Identifier is missing required layers.
    #[error("identifier '{0}' is not complete")]
    IncompleteIdentifier(String),

    /// Identifier or one of its layers could not be parsed.
    #[error("malformed identifier '{ich}': {detail}")]
    MalformedIdentifier {
        /// The offending identifier.
        ich: String,
        /// Description of the problem.
        detail: String,
    },

    /// Unrecognized element symbol in a molecular formula.
    #[error("unknown element symbol '{0}'")]
    UnknownElement(String),

    /// Spin multiplicity is not chemically possible for the identifier
    /// and charge.
    #[error("multiplicity {mul} is invalid for identifier '{ich}' with charge {chg}")]
    InvalidMultiplicity {
        /// The identifier being named.
        ich: String,
        /// Molecular charge.
        chg: i32,
        /// Spin multiplicity.
        mul: u32,
    },

    /// A reactant list was not in canonical sorted order.
    ///
    /// Only checked in safe mode; the multi-species naming functions
    /// require their identifier lists pre-sorted.
    #[error("reactants are not canonically sorted: {0:?}")]
    UnsortedReactants(Vec<String>),

    /// A reaction was not in canonical orientation.
    ///
    /// Only checked in safe mode; [`reaction_leaf`](crate::reaction_leaf)
    /// requires its input already passed through
    /// [`sort_together`](crate::sort_together).
    #[error("reaction sides are not in canonical orientation")]
    NonCanonicalReaction,

    /// Electronic structure method is not in the registry.
    #[error("unknown electronic structure method '{0}'")]
    UnknownMethod(String),

    /// Basis set is not in the registry.
    #[error("unknown basis set '{0}'")]
    UnknownBasis(String),

    /// Job type is not in the registry.
    #[error("unknown job type '{0}'")]
    UnknownJob(String),

    /// Random identifier carries the wrong type tag.
    #[error("identifier '{id}' does not start with tag '{expected}'")]
    WrongIdentifierTag {
        /// The tag character required for this identifier kind.
        expected: char,
        /// The identifier as received.
        id: String,
    },

    /// Random identifier suffix does not match the fixed token format.
    #[error("'{0}' is not a well-formed random string identifier")]
    MalformedRandomIdentifier(String),

    /// Scan coordinate name is not of the form `R<n>`, `A<n>` or `D<n>`.
    #[error("'{0}' is not a valid coordinate name")]
    BadCoordinateName(String),

    /// Numeric leaf index outside its allowed range.
    #[error("index {value} is out of range (max {max})")]
    IndexOutOfRange {
        /// The index as received.
        value: usize,
        /// Largest allowed value.
        max: usize,
    },
}

impl Error {
    /// Creates a [`MalformedIdentifier`](Error::MalformedIdentifier) error.
    pub fn malformed_identifier(ich: &str, detail: impl Into<String>) -> Self {
        Self::MalformedIdentifier {
            ich: ich.to_string(),
            detail: detail.into(),
        }
    }

    /// Creates an [`InvalidMultiplicity`](Error::InvalidMultiplicity) error.
    pub fn invalid_multiplicity(ich: &str, chg: i32, mul: u32) -> Self {
        Self::InvalidMultiplicity {
            ich: ich.to_string(),
            chg,
            mul,
        }
    }

    /// Creates an [`IndexOutOfRange`](Error::IndexOutOfRange) error.
    pub fn index_out_of_range(value: usize, max: usize) -> Self {
        Self::IndexOutOfRange { value, max }
    }
}
