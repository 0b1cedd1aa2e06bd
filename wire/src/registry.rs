//! Kind-to-body dispatch for envelope decoding.

use std::collections::BTreeMap;

use record::WireRecord;
use stream::BytesReader;

use crate::envelope::{Pdu, PduBody};
use crate::error::{DecodeError, WireResult};
use crate::header::{PduHeader, PduKind};

type BodyDecodeFn = fn(&mut BytesReader<'_>) -> record::DecodeResult<Box<dyn Pdu>>;

fn decode_boxed<B: PduBody>(r: &mut BytesReader<'_>) -> record::DecodeResult<Box<dyn Pdu>> {
    Ok(Box::new(B::decode(r)?))
}

/// A complete PDU decoded from a buffer.
#[derive(Debug)]
pub struct DecodedPdu {
    /// The header exactly as read, stated length included.
    pub header: PduHeader,
    /// The dispatched body.
    pub body: Box<dyn Pdu>,
    /// Bytes consumed from the buffer, header included.
    ///
    /// The codec does not require this to match `header.length`; the
    /// two are surfaced side by side so callers can diagnose senders
    /// that write stale lengths.
    pub consumed: usize,
}

impl DecodedPdu {
    /// Recovers the concrete body type, if it is a `B`.
    #[must_use]
    pub fn body_as<B: PduBody>(&self) -> Option<&B> {
        self.body.as_any().downcast_ref()
    }

    /// Returns `true` if the stated header length matches the bytes
    /// actually consumed.
    #[must_use]
    pub fn length_agrees(&self) -> bool {
        usize::from(self.header.length) == self.consumed
    }
}

/// Maps PDU kind tags to body decoders.
///
/// The registry is how applications extend the codec with new PDU kinds
/// without modifying it: implement [`PduBody`] and register the type.
/// Registering a kind twice replaces the earlier decoder.
#[derive(Debug, Default, Clone)]
pub struct PduRegistry {
    decoders: BTreeMap<u8, BodyDecodeFn>,
}

impl PduRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `B` as the body type for its kind tag.
    pub fn register<B: PduBody>(&mut self) {
        self.decoders.insert(B::KIND.to_int(), decode_boxed::<B>);
    }

    /// Returns `true` if a body type is registered for `kind`.
    #[must_use]
    pub fn contains(&self, kind: PduKind) -> bool {
        self.decoders.contains_key(&kind.to_int())
    }

    /// Number of registered kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Returns `true` if no kinds are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Decodes one PDU from the start of `buf`.
    ///
    /// Reads the header, dispatches on its kind tag, and decodes the
    /// matching body. An unregistered kind fails with
    /// [`DecodeError::UnknownPduKind`] carrying the header, so the
    /// caller may skip `header.length` bytes and continue a stream.
    /// Trailing bytes after the body are left unread.
    pub fn decode_pdu(&self, buf: &[u8]) -> WireResult<DecodedPdu> {
        let mut r = BytesReader::new(buf);
        let header = PduHeader::decode(&mut r).map_err(DecodeError::Record)?;
        let Some(decode) = self.decoders.get(&header.kind.to_int()) else {
            return Err(DecodeError::UnknownPduKind { header });
        };
        let body = decode(&mut r).map_err(DecodeError::Record)?;
        Ok(DecodedPdu {
            header,
            body,
            consumed: r.position(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::encode_pdu;
    use crate::header::ProtocolFamily;
    use record::{DecodeResult, FieldVisitor, VisitFields};
    use stream::BytesWriter;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct Mark {
        value: u16,
    }

    impl WireRecord for Mark {
        fn wire_size(&self) -> usize {
            2
        }

        fn encode(&self, w: &mut BytesWriter) {
            w.write_u16(self.value);
        }

        fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
            Ok(Self {
                value: r.read_u16()?,
            })
        }
    }

    impl VisitFields for Mark {
        fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
            visitor.scalar("value", self.value.into());
        }
    }

    impl PduBody for Mark {
        const KIND: PduKind = PduKind::COMMENT;
        const FAMILY: ProtocolFamily = ProtocolFamily::SIMULATION_MANAGEMENT;
    }

    fn encoded_mark(value: u16) -> Vec<u8> {
        let mark = Mark { value };
        encode_pdu(&PduHeader::for_pdu(&mark), &mark).unwrap()
    }

    #[test]
    fn register_and_decode() {
        let mut registry = PduRegistry::new();
        registry.register::<Mark>();
        assert!(registry.contains(PduKind::COMMENT));
        assert_eq!(registry.len(), 1);

        let bytes = encoded_mark(0xBEEF);
        let decoded = registry.decode_pdu(&bytes).unwrap();
        assert_eq!(decoded.consumed, bytes.len());
        assert!(decoded.length_agrees());
        assert_eq!(decoded.body_as::<Mark>().unwrap().value, 0xBEEF);
    }

    #[test]
    fn unknown_kind_carries_header() {
        let registry = PduRegistry::new();
        let bytes = encoded_mark(1);
        let err = registry.decode_pdu(&bytes).unwrap_err();
        match err {
            DecodeError::UnknownPduKind { header } => {
                assert_eq!(header.kind, PduKind::COMMENT);
                assert_eq!(usize::from(header.length), bytes.len());
            }
            other => panic!("expected UnknownPduKind, got {other:?}"),
        }
    }

    #[test]
    fn truncated_body_fails() {
        let mut registry = PduRegistry::new();
        registry.register::<Mark>();
        let bytes = encoded_mark(7);
        let err = registry.decode_pdu(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(err, DecodeError::Record(_)));
    }

    #[test]
    fn trailing_bytes_are_left_unread() {
        let mut registry = PduRegistry::new();
        registry.register::<Mark>();
        let mut bytes = encoded_mark(7);
        let pdu_len = bytes.len();
        bytes.extend_from_slice(&[0xAA; 5]);

        let decoded = registry.decode_pdu(&bytes).unwrap();
        assert_eq!(decoded.consumed, pdu_len);
    }

    #[test]
    fn reregistering_replaces() {
        let mut registry = PduRegistry::new();
        registry.register::<Mark>();
        registry.register::<Mark>();
        assert_eq!(registry.len(), 1);
    }
}
