//! The collision PDU.

use record::{DecodeResult, FieldVisitor, VisitFields, WireRecord};
use stream::{BytesReader, BytesWriter};
use wire::{PduBody, PduKind, ProtocolFamily};

use crate::geometry::Vector3Float;
use crate::ids::{EntityId, EventId};

record::wire_enum! {
    /// Kind of collision.
    pub struct CollisionType(u8) {
        INELASTIC = 0, "Inelastic";
        ELASTIC = 1, "Elastic";
    }
}

/// A collision between two entities, or between an entity and a
/// terrain object.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollisionPdu {
    pub issuing_entity_id: EntityId,
    pub colliding_entity_id: EntityId,
    pub event_id: EventId,
    pub collision_type: CollisionType,
    /// Wire padding, zero on encode.
    pub pad: u8,
    pub velocity: Vector3Float,
    /// Mass of the issuing entity in kilograms.
    pub mass: f32,
    /// Collision point relative to the issuing entity.
    pub location: Vector3Float,
}

impl WireRecord for CollisionPdu {
    fn wire_size(&self) -> usize {
        self.issuing_entity_id.wire_size()
            + self.colliding_entity_id.wire_size()
            + self.event_id.wire_size()
            + 1
            + 1
            + self.velocity.wire_size()
            + 4
            + self.location.wire_size()
    }

    fn encode(&self, w: &mut BytesWriter) {
        self.issuing_entity_id.encode(w);
        self.colliding_entity_id.encode(w);
        self.event_id.encode(w);
        w.write_u8(self.collision_type.to_int());
        w.write_u8(self.pad);
        self.velocity.encode(w);
        w.write_f32(self.mass);
        self.location.encode(w);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            issuing_entity_id: EntityId::decode(r)?,
            colliding_entity_id: EntityId::decode(r)?,
            event_id: EventId::decode(r)?,
            collision_type: CollisionType::from_int(r.read_u8()?),
            pad: r.read_u8()?,
            velocity: Vector3Float::decode(r)?,
            mass: r.read_f32()?,
            location: Vector3Float::decode(r)?,
        })
    }
}

impl VisitFields for CollisionPdu {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.begin_record("issuing_entity_id");
        self.issuing_entity_id.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("colliding_entity_id");
        self.colliding_entity_id.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("event_id");
        self.event_id.visit_fields(visitor);
        visitor.end_record();
        visitor.scalar("collision_type", self.collision_type.to_int().into());
        visitor.scalar("pad", self.pad.into());
        visitor.begin_record("velocity");
        self.velocity.visit_fields(visitor);
        visitor.end_record();
        visitor.scalar("mass", self.mass.into());
        visitor.begin_record("location");
        self.location.visit_fields(visitor);
        visitor.end_record();
    }
}

impl PduBody for CollisionPdu {
    const KIND: PduKind = PduKind::COLLISION;
    const FAMILY: ProtocolFamily = ProtocolFamily::ENTITY_INFORMATION;
}

#[cfg(test)]
mod tests {
    use super::*;
    use record::{decode_from_slice, encode_to_vec};

    #[test]
    fn body_is_48_bytes() {
        // 60 bytes total with the 12-byte header, per the standard.
        assert_eq!(CollisionPdu::default().wire_size(), 48);
    }

    #[test]
    fn roundtrip() {
        let pdu = CollisionPdu {
            issuing_entity_id: EntityId::new(1, 2, 3),
            colliding_entity_id: EntityId::new(1, 2, 4),
            event_id: EventId::new(1, 2, 50),
            collision_type: CollisionType::ELASTIC,
            velocity: Vector3Float::new(5.0, 0.0, 0.0),
            mass: 62_000.0,
            location: Vector3Float::new(1.5, 0.0, -0.5),
            ..Default::default()
        };
        let bytes = encode_to_vec(&pdu);
        assert_eq!(bytes.len(), 48);
        let (decoded, _) = decode_from_slice::<CollisionPdu>(&bytes).unwrap();
        assert_eq!(decoded, pdu);
    }
}
