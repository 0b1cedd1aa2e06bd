//! The detonation PDU.

use record::{
    decode_counted, encode_list, list_wire_size, DecodeResult, FieldVisitor, VisitFields,
    WireRecord,
};
use stream::{BytesReader, BytesWriter};
use wire::{PduBody, PduKind, ProtocolFamily};

use crate::articulation::ArticulationParameter;
use crate::geometry::{Vector3Double, Vector3Float};
use crate::ids::{EntityId, EventId};
use crate::munition::MunitionDescriptor;

record::wire_enum! {
    /// Outcome of a detonation.
    pub struct DetonationResult(u8) {
        OTHER = 0, "Other";
        ENTITY_IMPACT = 1, "Entity impact";
        ENTITY_PROXIMATE_DETONATION = 2, "Entity proximate detonation";
        GROUND_IMPACT = 3, "Ground impact";
        GROUND_PROXIMATE_DETONATION = 4, "Ground proximate detonation";
        DETONATION = 5, "Detonation";
        NONE_OR_NO_DETONATION = 6, "None or no detonation (dud)";
    }
}

/// The detonation of a munition.
///
/// Carries both the world-coordinate location and the location relative
/// to the target entity, plus the same trailing articulation list as the
/// entity state PDU.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetonationPdu {
    pub firing_entity_id: EntityId,
    pub target_entity_id: EntityId,
    pub munition_id: EntityId,
    pub event_id: EventId,
    pub velocity: Vector3Float,
    pub location: Vector3Double,
    pub burst_descriptor: MunitionDescriptor,
    pub location_in_entity_coordinates: Vector3Float,
    pub result: DetonationResult,
    /// Wire padding, zero on encode.
    pub pad: i16,
    pub articulation_parameters: Vec<ArticulationParameter>,
}

impl WireRecord for DetonationPdu {
    fn wire_size(&self) -> usize {
        self.firing_entity_id.wire_size()
            + self.target_entity_id.wire_size()
            + self.munition_id.wire_size()
            + self.event_id.wire_size()
            + self.velocity.wire_size()
            + self.location.wire_size()
            + self.burst_descriptor.wire_size()
            + self.location_in_entity_coordinates.wire_size()
            + 1
            + 1
            + 2
            + list_wire_size(&self.articulation_parameters)
    }

    fn encode(&self, w: &mut BytesWriter) {
        self.firing_entity_id.encode(w);
        self.target_entity_id.encode(w);
        self.munition_id.encode(w);
        self.event_id.encode(w);
        self.velocity.encode(w);
        self.location.encode(w);
        self.burst_descriptor.encode(w);
        self.location_in_entity_coordinates.encode(w);
        w.write_u8(self.result.to_int());
        w.write_u8(self.articulation_parameters.len() as u8);
        w.write_i16(self.pad);
        encode_list(&self.articulation_parameters, w);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        let firing_entity_id = EntityId::decode(r)?;
        let target_entity_id = EntityId::decode(r)?;
        let munition_id = EntityId::decode(r)?;
        let event_id = EventId::decode(r)?;
        let velocity = Vector3Float::decode(r)?;
        let location = Vector3Double::decode(r)?;
        let burst_descriptor = MunitionDescriptor::decode(r)?;
        let location_in_entity_coordinates = Vector3Float::decode(r)?;
        let result = DetonationResult::from_int(r.read_u8()?);
        let parameter_count = r.read_u8()?;
        let pad = r.read_i16()?;
        Ok(Self {
            firing_entity_id,
            target_entity_id,
            munition_id,
            event_id,
            velocity,
            location,
            burst_descriptor,
            location_in_entity_coordinates,
            result,
            pad,
            articulation_parameters: decode_counted(r, usize::from(parameter_count))?,
        })
    }
}

impl VisitFields for DetonationPdu {
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
        visitor.begin_record("velocity");
        self.velocity.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("location");
        self.location.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("burst_descriptor");
        self.burst_descriptor.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("location_in_entity_coordinates");
        self.location_in_entity_coordinates.visit_fields(visitor);
        visitor.end_record();
        visitor.scalar("result", self.result.to_int().into());
        visitor.scalar("pad", self.pad.into());
        visitor.begin_list(
            "articulation_parameters",
            self.articulation_parameters.len(),
        );
        for parameter in &self.articulation_parameters {
            visitor.begin_record("articulation_parameter");
            parameter.visit_fields(visitor);
            visitor.end_record();
        }
        visitor.end_list();
    }
}

impl PduBody for DetonationPdu {
    const KIND: PduKind = PduKind::DETONATION;
    const FAMILY: ProtocolFamily = ProtocolFamily::WARFARE;
}
