//! Error types
//!
//! Directive extraction itself never fails: a malformed entry is classified
//! with a [`SkipReason`], logged and dropped. [`Error`] only covers the
//! surrounding setup (configuration loading, tracing initialization and
//! syntax names coming from configuration or the command line).

use thiserror::Error;

/// Result type alias using the crate error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the crate
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Unrecognized filter or order syntax name
    #[error("Unknown {kind} syntax: {value}")]
    UnknownSyntax {
        /// Which syntax family was being parsed ("filter" or "order")
        kind: &'static str,
        /// The rejected name
        value: String,
    },

    /// Tracing subscriber could not be installed
    #[error("Tracing error: {0}")]
    Tracing(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

/// Why a single directive entry was left out of the result
///
/// Every variant means the same thing to callers: the entry is omitted and
/// extraction continues with the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SkipReason {
    /// No `[` ... `]` pair where one is required
    #[error("missing bracket")]
    MissingBracket,

    /// Bracket content is not a recognized operator
    #[error("unknown operator")]
    UnknownOperator,

    /// Bracket content is empty or has no letter
    #[error("empty operator")]
    EmptyOperator,

    /// Field name has no alphabetic character
    #[error("field has no letter")]
    FieldWithoutLetter,

    /// Filter value is empty
    #[error("empty value")]
    EmptyValue,

    /// Entry did not split into exactly field and direction
    #[error("expected field:direction")]
    WrongArity,

    /// Key prefix is not `sort`
    #[error("not a sort key")]
    NotSortKey,

    /// Sort position is not a non-negative integer
    #[error("invalid sort index")]
    InvalidIndex,
}
