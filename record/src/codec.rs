//! The codec contract every wire record implements.

use stream::{BytesReader, BytesWriter};

use crate::error::DecodeResult;

/// One structural unit of the wire format: a PDU body, a nested
/// sub-record, or a bitfield holder.
///
/// The byte layout order equals field declaration order, every field is
/// mandatory (absence is the zero value), and all scalars are big-endian.
///
/// `wire_size` is recomputed from the current contents (nested records
/// and list lengths included) on every call and is never cached, so a
/// record mutated after a size query cannot desynchronize its envelope.
///
/// Decoding performs no value validation: out-of-range enumeration
/// values are preserved, not rejected, because the standard gains values
/// over time. Structural failures (running out of bytes, length
/// disagreements) abort the decode and discard partial state.
pub trait WireRecord: Sized {
    /// Exact encoded length in bytes of the current contents.
    fn wire_size(&self) -> usize;

    /// Appends the record's wire form to the writer.
    ///
    /// Writing cannot fail; derived fields (counts, budgets) are
    /// recomputed from the in-memory state, never read from stale
    /// fields.
    fn encode(&self, w: &mut BytesWriter);

    /// Reads one record from the cursor, consuming exactly
    /// [`wire_size`](Self::wire_size) bytes of a well-formed encoding.
    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self>;
}

/// Encodes a record into a fresh byte buffer.
#[must_use]
pub fn encode_to_vec<T: WireRecord>(record: &T) -> Vec<u8> {
    let mut w = BytesWriter::with_capacity(record.wire_size());
    record.encode(&mut w);
    w.finish()
}

/// Decodes a record from the start of a buffer, returning it together
/// with the number of bytes consumed.
pub fn decode_from_slice<T: WireRecord>(buf: &[u8]) -> DecodeResult<(T, usize)> {
    let mut r = BytesReader::new(buf);
    let record = T::decode(&mut r)?;
    Ok((record, r.position()))
}
