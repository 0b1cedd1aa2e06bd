//! The fire PDU.

use record::{DecodeResult, FieldVisitor, VisitFields, WireRecord};
use stream::{BytesReader, BytesWriter};
use wire::{PduBody, PduKind, ProtocolFamily};

use crate::geometry::{Vector3Double, Vector3Float};
use crate::ids::{EntityId, EventId};
use crate::munition::MunitionDescriptor;

/// The firing of a weapon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirePdu {
    pub firing_entity_id: EntityId,
    pub target_entity_id: EntityId,
    pub munition_id: EntityId,
    pub event_id: EventId,
    pub fire_mission_index: u32,
    pub location: Vector3Double,
    pub burst_descriptor: MunitionDescriptor,
    pub velocity: Vector3Float,
    /// Range in meters the firing entity calculated, zero if unknown.
    pub range: f32,
}

impl WireRecord for FirePdu {
    fn wire_size(&self) -> usize {
        self.firing_entity_id.wire_size()
            + self.target_entity_id.wire_size()
            + self.munition_id.wire_size()
            + self.event_id.wire_size()
            + 4
            + self.location.wire_size()
            + self.burst_descriptor.wire_size()
            + self.velocity.wire_size()
            + 4
    }

    fn encode(&self, w: &mut BytesWriter) {
        self.firing_entity_id.encode(w);
        self.target_entity_id.encode(w);
        self.munition_id.encode(w);
        self.event_id.encode(w);
        w.write_u32(self.fire_mission_index);
        self.location.encode(w);
        self.burst_descriptor.encode(w);
        self.velocity.encode(w);
        w.write_f32(self.range);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            firing_entity_id: EntityId::decode(r)?,
            target_entity_id: EntityId::decode(r)?,
            munition_id: EntityId::decode(r)?,
            event_id: EventId::decode(r)?,
            fire_mission_index: r.read_u32()?,
            location: Vector3Double::decode(r)?,
            burst_descriptor: MunitionDescriptor::decode(r)?,
            velocity: Vector3Float::decode(r)?,
            range: r.read_f32()?,
        })
    }
}

impl VisitFields for FirePdu {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.begin_record("firing_entity_id");
        self.firing_entity_id.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("target_entity_id");
        self.target_entity_id.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("munition_id");
        self.munition_id.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("event_id");
        self.event_id.visit_fields(visitor);
        visitor.end_record();
        visitor.scalar("fire_mission_index", self.fire_mission_index.into());
        visitor.begin_record("location");
        self.location.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("burst_descriptor");
        self.burst_descriptor.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("velocity");
        self.velocity.visit_fields(visitor);
        visitor.end_record();
        visitor.scalar("range", self.range.into());
    }
}

impl PduBody for FirePdu {
    const KIND: PduKind = PduKind::FIRE;
    const FAMILY: ProtocolFamily = ProtocolFamily::WARFARE;
}
