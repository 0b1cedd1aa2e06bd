//! Iteration over buffers of concatenated PDUs.

use crate::error::{DecodeError, WireResult};
use crate::header::{PduHeader, HEADER_SIZE};
use crate::registry::{DecodedPdu, PduRegistry};

/// A cursor over a buffer holding zero or more concatenated PDUs.
///
/// Decoding stops at the first failure; the stream never skips bytes on
/// its own. When [`next_pdu`](Self::next_pdu) reports an unknown kind
/// the position is left at the start of the offending PDU, and the
/// caller may resynchronize with [`skip_declared`](Self::skip_declared)
/// using the stated header length, or stop. Continuing is a policy
/// decision that belongs to the caller, not the codec.
#[derive(Debug)]
pub struct PduStream<'a, 'r> {
    buf: &'a [u8],
    pos: usize,
    registry: &'r PduRegistry,
}

impl<'a, 'r> PduStream<'a, 'r> {
    /// Creates a stream over `buf` dispatching through `registry`.
    #[must_use]
    pub const fn new(buf: &'a [u8], registry: &'r PduRegistry) -> Self {
        Self {
            buf,
            pos: 0,
            registry,
        }
    }

    /// Returns the current byte offset into the buffer.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of unconsumed bytes.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Returns `true` if the buffer is fully consumed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Decodes the next PDU, advancing past it on success.
    ///
    /// On failure the position does not move, so the caller can inspect
    /// the error (and, for an unknown kind, skip the stated length)
    /// before deciding whether to continue.
    pub fn next_pdu(&mut self) -> Option<WireResult<DecodedPdu>> {
        if self.is_empty() {
            return None;
        }
        match self.registry.decode_pdu(&self.buf[self.pos..]) {
            Ok(decoded) => {
                self.pos += decoded.consumed;
                Some(Ok(decoded))
            }
            Err(err) => Some(Err(err)),
        }
    }

    /// Skips the bytes `header` declares, resynchronizing the stream
    /// after an unknown or undecodable PDU.
    ///
    /// Fails if the stated length is shorter than a header (the stream
    /// would not advance) or longer than the remaining buffer.
    pub fn skip_declared(&mut self, header: &PduHeader) -> WireResult<()> {
        let declared = usize::from(header.length);
        if declared < HEADER_SIZE {
            return Err(DecodeError::Record(record::DecodeError::BudgetMismatch {
                budget: declared,
                consumed: HEADER_SIZE,
            }));
        }
        let available = self.remaining();
        if declared > available {
            return Err(DecodeError::Record(record::DecodeError::UnexpectedEnd {
                requested: declared,
                available,
            }));
        }
        self.pos += declared;
        Ok(())
    }
}
