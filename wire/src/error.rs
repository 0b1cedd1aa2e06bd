//! Error types for envelope encoding and decoding.

use std::fmt;

use crate::header::PduHeader;

/// Result type for envelope decoding.
pub type WireResult<T> = Result<T, DecodeError>;

/// High-level decode errors for the PDU envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Structural failure while decoding the header or a body record.
    Record(record::DecodeError),

    /// The header's kind tag has no registered body type.
    ///
    /// Carries the header exactly as read; `header.length` lets the
    /// caller skip the remainder of this PDU and continue a stream.
    UnknownPduKind {
        /// The header that was decoded before dispatch failed.
        header: PduHeader,
    },
}

impl From<record::DecodeError> for DecodeError {
    fn from(err: record::DecodeError) -> Self {
        Self::Record(err)
    }
}

impl From<stream::StreamError> for DecodeError {
    fn from(err: stream::StreamError) -> Self {
        Self::Record(err.into())
    }
}

/// Errors that can occur during envelope encoding.
///
/// Both variants are invariant violations on the caller's side; neither
/// is recoverable by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The PDU is too large for the header's 16-bit length field.
    LengthOverflow {
        /// Total size the PDU would need.
        size: usize,
    },

    /// A body's `wire_size` disagreed with the bytes its encode wrote,
    /// e.g. the record was mutated between the two calls.
    SizeMismatch {
        /// Size computed before encoding.
        computed: usize,
        /// Bytes actually written.
        written: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(err) => write!(f, "record decode error: {err}"),
            Self::UnknownPduKind { header } => {
                write!(
                    f,
                    "unknown PDU kind {} (stated length {} bytes)",
                    header.kind.to_int(),
                    header.length
                )
            }
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthOverflow { size } => {
                write!(f, "PDU of {size} bytes exceeds the 16-bit length field")
            }
            Self::SizeMismatch { computed, written } => {
                write!(
                    f,
                    "body computed {computed} bytes but wrote {written} bytes"
                )
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Record(err) => Some(err),
            Self::UnknownPduKind { .. } => None,
        }
    }
}

impl std::error::Error for EncodeError {}
