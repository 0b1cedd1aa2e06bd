//! The entity state PDU.

use record::{
    decode_counted, encode_list, list_wire_size, DecodeResult, FieldVisitor, VisitFields,
    WireRecord,
};
use stream::{BytesReader, BytesWriter};
use wire::{PduBody, PduKind, ProtocolFamily};

use crate::articulation::ArticulationParameter;
use crate::dead_reckoning::DeadReckoningParameters;
use crate::entity_type::EntityType;
use crate::geometry::{EulerAngles, Vector3Double, Vector3Float};
use crate::ids::EntityId;
use crate::marking::Marking;

record::wire_enum! {
    /// Force the entity is affiliated with.
    pub struct ForceId(u8) {
        OTHER = 0, "Other";
        FRIENDLY = 1, "Friendly";
        OPPOSING = 2, "Opposing";
        NEUTRAL = 3, "Neutral";
    }
}

/// Position and state of one entity in the world.
///
/// The appearance and capabilities words are raw on the wire; interpret
/// appearance through the layouts in [`crate::appearance`] matching the
/// entity's kind and domain. The articulation count is materialized
/// from the list length at encode time.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityStatePdu {
    pub entity_id: EntityId,
    pub force_id: ForceId,
    pub entity_type: EntityType,
    pub alternative_entity_type: EntityType,
    pub linear_velocity: Vector3Float,
    pub location: Vector3Double,
    pub orientation: EulerAngles,
    /// Raw appearance word; see [`crate::appearance`] for typed views.
    pub appearance: u32,
    pub dead_reckoning: DeadReckoningParameters,
    pub marking: Marking,
    /// Raw capabilities word.
    pub capabilities: u32,
    pub articulation_parameters: Vec<ArticulationParameter>,
}

impl WireRecord for EntityStatePdu {
    fn wire_size(&self) -> usize {
        self.entity_id.wire_size()
            + 1
            + 1
            + self.entity_type.wire_size()
            + self.alternative_entity_type.wire_size()
            + self.linear_velocity.wire_size()
            + self.location.wire_size()
            + self.orientation.wire_size()
            + 4
            + self.dead_reckoning.wire_size()
            + self.marking.wire_size()
            + 4
            + list_wire_size(&self.articulation_parameters)
    }

    fn encode(&self, w: &mut BytesWriter) {
        self.entity_id.encode(w);
        w.write_u8(self.force_id.to_int());
        w.write_u8(self.articulation_parameters.len() as u8);
        self.entity_type.encode(w);
        self.alternative_entity_type.encode(w);
        self.linear_velocity.encode(w);
        self.location.encode(w);
        self.orientation.encode(w);
        w.write_u32(self.appearance);
        self.dead_reckoning.encode(w);
        self.marking.encode(w);
        w.write_u32(self.capabilities);
        encode_list(&self.articulation_parameters, w);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        let entity_id = EntityId::decode(r)?;
        let force_id = ForceId::from_int(r.read_u8()?);
        let parameter_count = r.read_u8()?;
        Ok(Self {
            entity_id,
            force_id,
            entity_type: EntityType::decode(r)?,
            alternative_entity_type: EntityType::decode(r)?,
            linear_velocity: Vector3Float::decode(r)?,
            location: Vector3Double::decode(r)?,
            orientation: EulerAngles::decode(r)?,
            appearance: r.read_u32()?,
            dead_reckoning: DeadReckoningParameters::decode(r)?,
            marking: Marking::decode(r)?,
            capabilities: r.read_u32()?,
            articulation_parameters: decode_counted(r, usize::from(parameter_count))?,
        })
    }
}

impl VisitFields for EntityStatePdu {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.begin_record("entity_id");
        self.entity_id.visit_fields(visitor);
        visitor.end_record();
        visitor.scalar("force_id", self.force_id.to_int().into());
        visitor.begin_record("entity_type");
        self.entity_type.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("alternative_entity_type");
        self.alternative_entity_type.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("linear_velocity");
        self.linear_velocity.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("location");
        self.location.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("orientation");
        self.orientation.visit_fields(visitor);
        visitor.end_record();
        visitor.scalar("appearance", self.appearance.into());
        visitor.begin_record("dead_reckoning");
        self.dead_reckoning.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("marking");
        self.marking.visit_fields(visitor);
        visitor.end_record();
        visitor.scalar("capabilities", self.capabilities.into());
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

impl PduBody for EntityStatePdu {
    const KIND: PduKind = PduKind::ENTITY_STATE;
    const FAMILY: ProtocolFamily = ProtocolFamily::ENTITY_INFORMATION;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::{Damage, LandPlatformAppearance};
    use record::{decode_from_slice, encode_to_vec};

    fn sample() -> EntityStatePdu {
        let mut espdu = EntityStatePdu {
            entity_id: EntityId::new(1, 2, 3),
            force_id: ForceId::FRIENDLY,
            marking: Marking::ascii("BULLDOG-6"),
            ..Default::default()
        };
        espdu.location = Vector3Double::new(1_000_000.0, -2_000_000.0, 3_000_000.0);
        espdu.linear_velocity = Vector3Float::new(10.0, 0.0, -1.0);
        espdu
    }

    #[test]
    fn base_body_is_132_bytes() {
        // 144 bytes total with the 12-byte header, per the standard.
        assert_eq!(sample().wire_size(), 132);
    }

    #[test]
    fn each_articulation_parameter_adds_16_bytes() {
        let mut espdu = sample();
        espdu.articulation_parameters.push(Default::default());
        espdu.articulation_parameters.push(Default::default());
        assert_eq!(espdu.wire_size(), 132 + 32);
    }

    #[test]
    fn roundtrip_without_parameters() {
        let espdu = sample();
        let bytes = encode_to_vec(&espdu);
        assert_eq!(bytes.len(), espdu.wire_size());
        let (decoded, consumed) = decode_from_slice::<EntityStatePdu>(&bytes).unwrap();
        assert_eq!(decoded, espdu);
        assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn roundtrip_with_parameters() {
        let mut espdu = sample();
        espdu.articulation_parameters.push(ArticulationParameter {
            parameter_type: 4107,
            parameter_value: 0.5,
            ..Default::default()
        });
        let (decoded, _) = decode_from_slice::<EntityStatePdu>(&encode_to_vec(&espdu)).unwrap();
        assert_eq!(decoded, espdu);
    }

    #[test]
    fn count_byte_follows_the_list() {
        let mut espdu = sample();
        espdu.articulation_parameters.push(Default::default());
        espdu.articulation_parameters.push(Default::default());
        espdu.articulation_parameters.push(Default::default());

        let bytes = encode_to_vec(&espdu);
        assert_eq!(bytes[7], 3, "count byte sits after entity id + force id");

        espdu.articulation_parameters.truncate(1);
        let bytes = encode_to_vec(&espdu);
        assert_eq!(bytes[7], 1);
    }

    #[test]
    fn appearance_word_is_raw_on_the_wire() {
        let mut word = LandPlatformAppearance::default();
        word.damage = Damage::DESTROYED;
        let mut espdu = sample();
        espdu.appearance = word.to_bits();

        let bytes = encode_to_vec(&espdu);
        let (decoded, _) = decode_from_slice::<EntityStatePdu>(&bytes).unwrap();
        let view = LandPlatformAppearance::from_bits(decoded.appearance);
        assert_eq!(view.damage, Damage::DESTROYED);
    }

    #[test]
    fn truncation_anywhere_fails() {
        let espdu = sample();
        let bytes = encode_to_vec(&espdu);
        for cut in [0, 1, 7, 8, 50, 100, bytes.len() - 1] {
            assert!(decode_from_slice::<EntityStatePdu>(&bytes[..cut]).is_err());
        }
    }
}
