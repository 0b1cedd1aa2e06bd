//! The data PDU.

use record::{
    decode_counted, encode_list, list_wire_size, DecodeResult, FieldVisitor, VisitFields,
    WireRecord,
};
use stream::{BytesReader, BytesWriter};
use wire::{PduBody, PduKind, ProtocolFamily};

use crate::datum::{FixedDatum, VariableDatum};
use crate::ids::EntityId;

/// Simulation-management response carrying fixed and variable datums.
///
/// Both datum counts are 32-bit fields materialized from the list
/// lengths at encode time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPdu {
    pub originating_entity_id: EntityId,
    pub receiving_entity_id: EntityId,
    /// Request this data answers, zero if unsolicited.
    pub request_id: u32,
    /// Wire padding, zero on encode.
    pub padding: u32,
    pub fixed_datums: Vec<FixedDatum>,
    pub variable_datums: Vec<VariableDatum>,
}

impl WireRecord for DataPdu {
    fn wire_size(&self) -> usize {
        self.originating_entity_id.wire_size()
            + self.receiving_entity_id.wire_size()
            + 4
            + 4
            + 4
            + 4
            + list_wire_size(&self.fixed_datums)
            + list_wire_size(&self.variable_datums)
    }

    fn encode(&self, w: &mut BytesWriter) {
        self.originating_entity_id.encode(w);
        self.receiving_entity_id.encode(w);
        w.write_u32(self.request_id);
        w.write_u32(self.padding);
        w.write_u32(self.fixed_datums.len() as u32);
        w.write_u32(self.variable_datums.len() as u32);
        encode_list(&self.fixed_datums, w);
        encode_list(&self.variable_datums, w);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        let originating_entity_id = EntityId::decode(r)?;
        let receiving_entity_id = EntityId::decode(r)?;
        let request_id = r.read_u32()?;
        let padding = r.read_u32()?;
        let fixed_count = r.read_u32()?;
        let variable_count = r.read_u32()?;
        Ok(Self {
            originating_entity_id,
            receiving_entity_id,
            request_id,
            padding,
            fixed_datums: decode_counted(r, fixed_count as usize)?,
            variable_datums: decode_counted(r, variable_count as usize)?,
        })
    }
}

impl VisitFields for DataPdu {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.begin_record("originating_entity_id");
        self.originating_entity_id.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("receiving_entity_id");
        self.receiving_entity_id.visit_fields(visitor);
        visitor.end_record();
        visitor.scalar("request_id", self.request_id.into());
        visitor.scalar("padding", self.padding.into());
        visitor.begin_list("fixed_datums", self.fixed_datums.len());
        for datum in &self.fixed_datums {
            visitor.begin_record("fixed_datum");
            datum.visit_fields(visitor);
            visitor.end_record();
        }
        visitor.end_list();
        visitor.begin_list("variable_datums", self.variable_datums.len());
        for datum in &self.variable_datums {
            visitor.begin_record("variable_datum");
            datum.visit_fields(visitor);
            visitor.end_record();
        }
        visitor.end_list();
    }
}

impl PduBody for DataPdu {
    const KIND: PduKind = PduKind::DATA;
    const FAMILY: ProtocolFamily = ProtocolFamily::SIMULATION_MANAGEMENT;
}

#[cfg(test)]
mod tests {
    use super::*;
    use record::{decode_from_slice, encode_to_vec};

    #[test]
    fn empty_body_is_28_bytes() {
        assert_eq!(DataPdu::default().wire_size(), 28);
    }

    #[test]
    fn roundtrip_with_both_datum_kinds() {
        let pdu = DataPdu {
            originating_entity_id: EntityId::new(1, 1, 1),
            receiving_entity_id: EntityId::new(2, 2, 2),
            request_id: 77,
            fixed_datums: vec![FixedDatum::new(240, 1), FixedDatum::new(241, 2)],
            variable_datums: vec![VariableDatum::from_bytes(500, b"STATUS: OK")],
            ..Default::default()
        };
        let bytes = encode_to_vec(&pdu);
        assert_eq!(bytes.len(), pdu.wire_size());
        let (decoded, consumed) = decode_from_slice::<DataPdu>(&bytes).unwrap();
        assert_eq!(decoded, pdu);
        assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn counts_are_written_from_list_lengths() {
        let mut pdu = DataPdu {
            fixed_datums: vec![FixedDatum::new(1, 1); 3],
            ..Default::default()
        };
        let bytes = encode_to_vec(&pdu);
        assert_eq!(u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]), 3);
        assert_eq!(u32::from_be_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]), 0);

        pdu.fixed_datums.clear();
        pdu.variable_datums.push(VariableDatum::from_bytes(2, b"X"));
        let bytes = encode_to_vec(&pdu);
        assert_eq!(u32::from_be_bytes([bytes[20], bytes[21], bytes[22], bytes[23]]), 0);
        assert_eq!(u32::from_be_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]), 1);
    }

    #[test]
    fn truncated_datum_list_fails() {
        let pdu = DataPdu {
            fixed_datums: vec![FixedDatum::new(1, 2)],
            ..Default::default()
        };
        let bytes = encode_to_vec(&pdu);
        let err = decode_from_slice::<DataPdu>(&bytes[..bytes.len() - 2]).unwrap_err();
        assert!(matches!(err, record::DecodeError::UnexpectedEnd { .. }));
    }
}
