//! The PDU envelope: header plus body, with length recomputation.

use std::any::Any;
use std::fmt;

use record::{VisitFields, WireRecord};
use stream::BytesWriter;

use crate::error::EncodeError;
use crate::header::{PduHeader, PduKind, ProtocolFamily, HEADER_SIZE};

/// An encodable PDU body behind a uniform, object-safe surface.
///
/// Concrete body types implement [`PduBody`]; this trait exists so the
/// registry and the envelope can hold any body as `Box<dyn Pdu>`.
pub trait Pdu: fmt::Debug + VisitFields {
    /// The dispatch tag this body encodes under.
    fn kind(&self) -> PduKind;

    /// The protocol family advertised for this body.
    fn family(&self) -> ProtocolFamily;

    /// Current encoded body length in bytes, header excluded.
    fn body_size(&self) -> usize;

    /// Appends the body's wire form after an already-written header.
    fn encode_body(&self, w: &mut BytesWriter);

    /// Upcast used to recover the concrete body type.
    fn as_any(&self) -> &dyn Any;
}

/// Static description of a concrete PDU body type.
///
/// Implementing this (plus [`WireRecord`] and [`VisitFields`]) is all a
/// new PDU kind needs to participate in envelope encoding and registry
/// dispatch; the blanket [`Pdu`] impl covers the rest.
pub trait PduBody: WireRecord + VisitFields + fmt::Debug + Any {
    /// The dispatch tag this body type encodes under.
    const KIND: PduKind;

    /// The protocol family the kind belongs to.
    const FAMILY: ProtocolFamily;
}

impl<B: PduBody> Pdu for B {
    fn kind(&self) -> PduKind {
        B::KIND
    }

    fn family(&self) -> ProtocolFamily {
        B::FAMILY
    }

    fn body_size(&self) -> usize {
        self.wire_size()
    }

    fn encode_body(&self, w: &mut BytesWriter) {
        self.encode(w);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl PduHeader {
    /// Creates a header pre-filled with `body`'s kind and family.
    #[must_use]
    pub fn for_pdu(body: &dyn Pdu) -> Self {
        Self::new(body.kind(), body.family())
    }
}

/// Encodes a complete PDU: header first, then body.
///
/// The header's length field is recomputed as `HEADER_SIZE +
/// body.body_size()` before anything is written; a stale stored length
/// is ignored. Header fields other than the length are written as
/// given. After the body is written the total is checked against the
/// computed size, surfacing any `wire_size`/`encode` disagreement as
/// [`EncodeError::SizeMismatch`].
pub fn encode_pdu(header: &PduHeader, body: &dyn Pdu) -> Result<Vec<u8>, EncodeError> {
    let total = HEADER_SIZE + body.body_size();
    let length = u16::try_from(total).map_err(|_| EncodeError::LengthOverflow { size: total })?;

    let mut wire_header = *header;
    wire_header.length = length;

    let mut w = BytesWriter::with_capacity(total);
    wire_header.encode(&mut w);
    body.encode_body(&mut w);

    if w.len() != total {
        return Err(EncodeError::SizeMismatch {
            computed: total,
            written: w.len(),
        });
    }
    Ok(w.finish())
}
