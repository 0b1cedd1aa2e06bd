//! Error types for byte stream operations.

use std::fmt;

/// Result type for byte stream operations.
pub type StreamResult<T> = Result<T, StreamError>;

/// Errors that can occur while reading from a byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamError {
    /// Attempted to read past the end of the buffer.
    UnexpectedEnd {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
        }
    }
}

impl std::error::Error for StreamError {}
