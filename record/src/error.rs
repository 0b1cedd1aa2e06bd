//! Error types for record decoding.

use std::fmt;

use stream::StreamError;

/// Result type for record decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Errors that can occur while decoding records.
///
/// Decoding never validates field *values*; these errors are structural:
/// the bytes ran out, or a declared length disagrees with what the field
/// order actually consumed. A failed decode discards all partial state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Fewer bytes remained than a field or record requires.
    UnexpectedEnd {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A declared byte budget disagrees with the bytes actually consumed.
    BudgetMismatch {
        /// Bytes the enclosing length field declared.
        budget: usize,
        /// Bytes the record contents consumed.
        consumed: usize,
    },

    /// A declared element count disagrees with the elements present.
    CountMismatch {
        /// Elements the count field declared.
        declared: usize,
        /// Elements actually decoded.
        actual: usize,
    },
}

impl From<StreamError> for DecodeError {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::UnexpectedEnd {
                requested,
                available,
            } => Self::UnexpectedEnd {
                requested,
                available,
            },
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd {
                requested,
                available,
            } => {
                write!(
                    f,
                    "record needs {requested} bytes but only {available} remain"
                )
            }
            Self::BudgetMismatch { budget, consumed } => {
                write!(
                    f,
                    "declared length of {budget} bytes but {consumed} bytes consumed"
                )
            }
            Self::CountMismatch { declared, actual } => {
                write!(f, "declared {declared} elements but found {actual}")
            }
        }
    }
}

impl std::error::Error for DecodeError {}
