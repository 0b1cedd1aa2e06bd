//! The articulation parameter record.

use record::{DecodeResult, FieldVisitor, VisitFields, WireRecord};
use stream::{BytesReader, BytesWriter};

record::wire_enum! {
    /// Whether the parameter describes an articulated or an attached part.
    pub struct ParameterTypeDesignator(u8) {
        ARTICULATED_PART = 0, "Articulated part";
        ATTACHED_PART = 1, "Attached part";
    }
}

/// One movable or attached part of an entity, carried in the trailing
/// variable list of the entity state PDU.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArticulationParameter {
    pub type_designator: ParameterTypeDesignator,
    /// Incremented each time the part's state changes.
    pub change_indicator: u8,
    /// Articulated part this one is attached to; zero for the entity.
    pub part_attached_to: u16,
    pub parameter_type: u32,
    pub parameter_value: f64,
}

impl WireRecord for ArticulationParameter {
    fn wire_size(&self) -> usize {
        16
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_u8(self.type_designator.to_int());
        w.write_u8(self.change_indicator);
        w.write_u16(self.part_attached_to);
        w.write_u32(self.parameter_type);
        w.write_f64(self.parameter_value);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            type_designator: ParameterTypeDesignator::from_int(r.read_u8()?),
            change_indicator: r.read_u8()?,
            part_attached_to: r.read_u16()?,
            parameter_type: r.read_u32()?,
            parameter_value: r.read_f64()?,
        })
    }
}

impl VisitFields for ArticulationParameter {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("type_designator", self.type_designator.to_int().into());
        visitor.scalar("change_indicator", self.change_indicator.into());
        visitor.scalar("part_attached_to", self.part_attached_to.into());
        visitor.scalar("parameter_type", self.parameter_type.into());
        visitor.scalar("parameter_value", self.parameter_value.into());
    }
}
