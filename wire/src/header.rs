//! The common PDU header.

use record::{DecodeResult, FieldVisitor, VisitFields, WireRecord};
use stream::{BytesReader, BytesWriter};

/// Header size in bytes (12 total).
pub const HEADER_SIZE: usize = 1 + 1 + 1 + 1 + 4 + 2 + 2;

record::wire_enum! {
    /// The version of the protocol carried in every PDU header.
    pub struct ProtocolVersion(u8) {
        OTHER = 0, "Other";
        DIS_PDU_1_0 = 1, "DIS PDU version 1.0";
        IEEE_1278_1993 = 2, "IEEE 1278-1993";
        DIS_PDU_2_0 = 3, "DIS PDU version 2.0";
        IEEE_1278_1_1995 = 5, "IEEE 1278.1-1995";
        IEEE_1278_1A_1998 = 6, "IEEE 1278.1A-1998";
    }
}

record::wire_enum! {
    /// The dispatch tag selecting a PDU's body type.
    pub struct PduKind(u8) {
        OTHER = 0, "Other";
        ENTITY_STATE = 1, "Entity State";
        FIRE = 2, "Fire";
        DETONATION = 3, "Detonation";
        COLLISION = 4, "Collision";
        SERVICE_REQUEST = 5, "Service Request";
        RESUPPLY_OFFER = 6, "Resupply Offer";
        RESUPPLY_RECEIVED = 7, "Resupply Received";
        RESUPPLY_CANCEL = 8, "Resupply Cancel";
        REPAIR_COMPLETE = 9, "Repair Complete";
        REPAIR_RESPONSE = 10, "Repair Response";
        CREATE_ENTITY = 11, "Create Entity";
        REMOVE_ENTITY = 12, "Remove Entity";
        START_RESUME = 13, "Start/Resume";
        STOP_FREEZE = 14, "Stop/Freeze";
        ACKNOWLEDGE = 15, "Acknowledge";
        ACTION_REQUEST = 16, "Action Request";
        ACTION_RESPONSE = 17, "Action Response";
        DATA_QUERY = 18, "Data Query";
        SET_DATA = 19, "Set Data";
        DATA = 20, "Data";
        EVENT_REPORT = 21, "Event Report";
        COMMENT = 22, "Comment";
        ELECTROMAGNETIC_EMISSION = 23, "Electromagnetic Emission";
        DESIGNATOR = 24, "Designator";
        TRANSMITTER = 25, "Transmitter";
        SIGNAL = 26, "Signal";
        RECEIVER = 27, "Receiver";
    }
}

record::wire_enum! {
    /// The protocol family a PDU kind belongs to.
    pub struct ProtocolFamily(u8) {
        OTHER = 0, "Other";
        ENTITY_INFORMATION = 1, "Entity Information/Interaction";
        WARFARE = 2, "Warfare";
        LOGISTICS = 3, "Logistics";
        RADIO_COMMUNICATIONS = 4, "Radio Communications";
        SIMULATION_MANAGEMENT = 5, "Simulation Management";
        DISTRIBUTED_EMISSION_REGENERATION = 6, "Distributed Emission Regeneration";
    }
}

/// The fixed-layout header beginning every PDU.
///
/// `length` holds the total PDU length in bytes *as stated on the wire*.
/// The envelope encoder ignores any stored value and recomputes it from
/// the body size; the decoder surfaces the stated value untouched so
/// callers can compare it against the bytes actually consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PduHeader {
    /// Protocol version of the emitting application.
    pub protocol_version: ProtocolVersion,
    /// Exercise this PDU belongs to.
    pub exercise_id: u8,
    /// Dispatch tag selecting the body type.
    pub kind: PduKind,
    /// Family the kind belongs to.
    pub family: ProtocolFamily,
    /// Timestamp in the standard's time-of-hour units; opaque here.
    pub timestamp: u32,
    /// Total PDU length in bytes as stated on the wire.
    pub length: u16,
    /// Header padding, zero on the wire.
    pub padding: i16,
}

impl PduHeader {
    /// Creates a header for the given kind and family, at protocol
    /// version IEEE 1278.1A-1998 with all other fields zero.
    #[must_use]
    pub const fn new(kind: PduKind, family: ProtocolFamily) -> Self {
        Self {
            protocol_version: ProtocolVersion::IEEE_1278_1A_1998,
            exercise_id: 0,
            kind,
            family,
            timestamp: 0,
            length: 0,
            padding: 0,
        }
    }

    /// Sets the exercise identifier.
    #[must_use]
    pub const fn with_exercise(mut self, exercise_id: u8) -> Self {
        self.exercise_id = exercise_id;
        self
    }

    /// Sets the timestamp.
    #[must_use]
    pub const fn with_timestamp(mut self, timestamp: u32) -> Self {
        self.timestamp = timestamp;
        self
    }
}

impl WireRecord for PduHeader {
    fn wire_size(&self) -> usize {
        HEADER_SIZE
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_u8(self.protocol_version.to_int());
        w.write_u8(self.exercise_id);
        w.write_u8(self.kind.to_int());
        w.write_u8(self.family.to_int());
        w.write_u32(self.timestamp);
        w.write_u16(self.length);
        w.write_i16(self.padding);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            protocol_version: ProtocolVersion::from_int(r.read_u8()?),
            exercise_id: r.read_u8()?,
            kind: PduKind::from_int(r.read_u8()?),
            family: ProtocolFamily::from_int(r.read_u8()?),
            timestamp: r.read_u32()?,
            length: r.read_u16()?,
            padding: r.read_i16()?,
        })
    }
}

impl VisitFields for PduHeader {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("protocol_version", self.protocol_version.to_int().into());
        visitor.scalar("exercise_id", self.exercise_id.into());
        visitor.scalar("pdu_type", self.kind.to_int().into());
        visitor.scalar("protocol_family", self.family.to_int().into());
        visitor.scalar("timestamp", self.timestamp.into());
        visitor.scalar("length", self.length.into());
        visitor.scalar("padding", self.padding.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use record::{decode_from_slice, encode_to_vec};

    #[test]
    fn header_size_is_twelve() {
        assert_eq!(HEADER_SIZE, 12);
    }

    #[test]
    fn new_defaults_to_1998_version() {
        let header = PduHeader::new(PduKind::ENTITY_STATE, ProtocolFamily::ENTITY_INFORMATION);
        assert_eq!(header.protocol_version, ProtocolVersion::IEEE_1278_1A_1998);
        assert_eq!(header.kind, PduKind::ENTITY_STATE);
        assert_eq!(header.length, 0);
        assert_eq!(header.padding, 0);
    }

    #[test]
    fn builder_setters() {
        let header = PduHeader::new(PduKind::FIRE, ProtocolFamily::WARFARE)
            .with_exercise(3)
            .with_timestamp(0xAABB_CCDD);
        assert_eq!(header.exercise_id, 3);
        assert_eq!(header.timestamp, 0xAABB_CCDD);
    }

    #[test]
    fn wire_layout_matches_standard() {
        let mut header = PduHeader::new(PduKind::ENTITY_STATE, ProtocolFamily::ENTITY_INFORMATION)
            .with_exercise(2)
            .with_timestamp(0x0102_0304);
        header.length = 144;

        let bytes = encode_to_vec(&header);
        assert_eq!(
            bytes,
            vec![6, 2, 1, 1, 0x01, 0x02, 0x03, 0x04, 0x00, 0x90, 0, 0]
        );
    }

    #[test]
    fn header_roundtrip() {
        let mut header = PduHeader::new(PduKind::DATA, ProtocolFamily::SIMULATION_MANAGEMENT)
            .with_exercise(9)
            .with_timestamp(42);
        header.length = 1234;

        let bytes = encode_to_vec(&header);
        let (decoded, consumed) = decode_from_slice::<PduHeader>(&bytes).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(consumed, HEADER_SIZE);
    }

    #[test]
    fn unknown_kind_round_trips() {
        let mut header = PduHeader::new(PduKind::from_int(200), ProtocolFamily::from_int(99));
        header.length = 12;
        let bytes = encode_to_vec(&header);
        let (decoded, _) = decode_from_slice::<PduHeader>(&bytes).unwrap();
        assert_eq!(decoded.kind.to_int(), 200);
        assert_eq!(decoded.family.to_int(), 99);
    }

    #[test]
    fn truncated_header_fails() {
        let header = PduHeader::new(PduKind::FIRE, ProtocolFamily::WARFARE);
        let bytes = encode_to_vec(&header);
        for cut in 0..HEADER_SIZE {
            assert!(decode_from_slice::<PduHeader>(&bytes[..cut]).is_err());
        }
    }

    #[test]
    fn kind_labels() {
        assert_eq!(PduKind::ENTITY_STATE.label(), Some("Entity State"));
        assert_eq!(PduKind::from_int(200).label(), None);
    }
}
