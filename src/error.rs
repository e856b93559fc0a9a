//! Error types for tsp-ga.
//!
//! All failures are deterministic input-validation failures detected at the
//! boundary of the operation that would violate them. There are no transient
//! conditions and no retries: the caller must supply valid input.

use thiserror::Error;

/// Result type alias for tsp-ga operations.
pub type TspResult<T> = Result<T, TspError>;

/// Unified error type for all tsp-ga operations.
#[derive(Debug, Error, PartialEq)]
pub enum TspError {
    /// Empty or malformed city list.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation's precondition does not hold (e.g. tournament size
    /// exceeding population size, zero population).
    #[error("precondition violated: {0}")]
    Precondition(String),

    /// A tour length was requested on an empty tour.
    #[error("degenerate tour: {0}")]
    DegenerateTour(String),

    /// A line in the coordinate section could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number within the input.
        line: usize,
        /// Description of the malformed content.
        message: String,
    },
}
