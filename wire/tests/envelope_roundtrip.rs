use proptest::prelude::*;
use record::{DecodeResult, FieldVisitor, VisitFields, WireRecord};
use stream::{BytesReader, BytesWriter};
use wire::{
    encode_pdu, DecodeError, PduBody, PduHeader, PduKind, PduRegistry, ProtocolFamily, HEADER_SIZE,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Roster {
    leader: u16,
    members: Vec<u16>,
}

impl WireRecord for Roster {
    fn wire_size(&self) -> usize {
        2 + 1 + self.members.len() * 2
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_u16(self.leader);
        w.write_u8(self.members.len() as u8);
        for member in &self.members {
            w.write_u16(*member);
        }
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        let leader = r.read_u16()?;
        let count = r.read_u8()?;
        let mut members = Vec::with_capacity(usize::from(count));
        for _ in 0..count {
            members.push(r.read_u16()?);
        }
        Ok(Self { leader, members })
    }
}

impl VisitFields for Roster {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("leader", self.leader.into());
        visitor.begin_list("members", self.members.len());
        for member in &self.members {
            visitor.scalar("member", (*member).into());
        }
        visitor.end_list();
    }
}

impl PduBody for Roster {
    const KIND: PduKind = PduKind::OTHER;
    const FAMILY: ProtocolFamily = ProtocolFamily::OTHER;
}

fn registry() -> PduRegistry {
    let mut registry = PduRegistry::new();
    registry.register::<Roster>();
    registry
}

#[test]
fn envelope_roundtrip_with_variable_body() {
    let roster = Roster {
        leader: 100,
        members: vec![1, 2, 3],
    };
    let header = PduHeader::for_pdu(&roster).with_exercise(8);
    let bytes = encode_pdu(&header, &roster).unwrap();
    assert_eq!(bytes.len(), HEADER_SIZE + roster.wire_size());

    let decoded = registry().decode_pdu(&bytes).unwrap();
    assert_eq!(decoded.consumed, bytes.len());
    assert!(decoded.length_agrees());
    assert_eq!(decoded.header.exercise_id, 8);
    assert_eq!(decoded.body_as::<Roster>().unwrap(), &roster);
}

#[test]
fn stale_zero_length_still_roundtrips() {
    // A header with length deliberately wrong: encode must recompute
    // from the body, decode must surface whatever the wire said.
    let roster = Roster {
        leader: 5,
        members: vec![9],
    };
    let mut header = PduHeader::for_pdu(&roster);
    header.length = 0;

    let bytes = encode_pdu(&header, &roster).unwrap();
    let expected = HEADER_SIZE + roster.wire_size();
    assert_eq!(
        u16::from_be_bytes([bytes[8], bytes[9]]),
        expected as u16,
        "encode writes the recomputed length, not the stale field"
    );

    let decoded = registry().decode_pdu(&bytes).unwrap();
    assert_eq!(usize::from(decoded.header.length), expected);
    assert_eq!(decoded.consumed, expected);
    assert_eq!(decoded.body_as::<Roster>().unwrap(), &roster);
}

#[test]
fn decode_surfaces_wire_length_even_when_wrong() {
    // Hand-corrupt the length field after encoding; decode must report
    // the stated value next to the actual consumption, not patch it.
    let roster = Roster {
        leader: 1,
        members: vec![],
    };
    let mut bytes = encode_pdu(&PduHeader::for_pdu(&roster), &roster).unwrap();
    bytes[8] = 0;
    bytes[9] = 0;

    let decoded = registry().decode_pdu(&bytes).unwrap();
    assert_eq!(decoded.header.length, 0);
    assert_eq!(decoded.consumed, bytes.len());
    assert!(!decoded.length_agrees());
}

#[test]
fn count_fidelity_after_mutation() {
    let mut roster = Roster {
        leader: 2,
        members: vec![7, 8, 9, 10],
    };
    let bytes = encode_pdu(&PduHeader::for_pdu(&roster), &roster).unwrap();
    assert_eq!(bytes[HEADER_SIZE + 2], 4);

    roster.members.truncate(1);
    let bytes = encode_pdu(&PduHeader::for_pdu(&roster), &roster).unwrap();
    assert_eq!(bytes[HEADER_SIZE + 2], 1);
    assert_eq!(
        u16::from_be_bytes([bytes[8], bytes[9]]) as usize,
        bytes.len(),
        "recomputed length shrinks with the list"
    );
}

proptest! {
    // Header decoding is total: any 12 bytes are a header, and encoding
    // the result reproduces them exactly, unknown enumeration values
    // included.
    #[test]
    fn prop_any_header_bytes_reencode_exactly(bytes in prop::array::uniform12(any::<u8>())) {
        let (header, consumed) = record::decode_from_slice::<PduHeader>(&bytes).unwrap();
        prop_assert_eq!(consumed, HEADER_SIZE);
        let reencoded = record::encode_to_vec(&header);
        prop_assert_eq!(reencoded.as_slice(), &bytes[..]);
    }
}

#[test]
fn truncated_pdu_fails_structurally() {
    let roster = Roster {
        leader: 3,
        members: vec![4, 5],
    };
    let bytes = encode_pdu(&PduHeader::for_pdu(&roster), &roster).unwrap();
    let registry = registry();

    for cut in 0..bytes.len() {
        let err = registry.decode_pdu(&bytes[..cut]).unwrap_err();
        assert!(
            matches!(err, DecodeError::Record(record::DecodeError::UnexpectedEnd { .. })),
            "cut at {cut} gave {err:?}"
        );
    }
}
