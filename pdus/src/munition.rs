//! The munition (burst) descriptor record.

use record::{DecodeResult, FieldVisitor, VisitFields, WireRecord};
use stream::{BytesReader, BytesWriter};

use crate::entity_type::EntityType;

/// Describes the munition expended by a fire or detonation.
///
/// Warhead and fuse values are enumeration-table lookups carried as
/// plain scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MunitionDescriptor {
    pub munition: EntityType,
    pub warhead: u16,
    pub fuse: u16,
    /// Rounds in the burst.
    pub quantity: u16,
    /// Rounds per minute; zero for a single round.
    pub rate: u16,
}

impl WireRecord for MunitionDescriptor {
    fn wire_size(&self) -> usize {
        self.munition.wire_size() + 2 + 2 + 2 + 2
    }

    fn encode(&self, w: &mut BytesWriter) {
        self.munition.encode(w);
        w.write_u16(self.warhead);
        w.write_u16(self.fuse);
        w.write_u16(self.quantity);
        w.write_u16(self.rate);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            munition: EntityType::decode(r)?,
            warhead: r.read_u16()?,
            fuse: r.read_u16()?,
            quantity: r.read_u16()?,
            rate: r.read_u16()?,
        })
    }
}

impl VisitFields for MunitionDescriptor {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.begin_record("munition");
        self.munition.visit_fields(visitor);
        visitor.end_record();
        visitor.scalar("warhead", self.warhead.into());
        visitor.scalar("fuse", self.fuse.into());
        visitor.scalar("quantity", self.quantity.into());
        visitor.scalar("rate", self.rate.into());
    }
}
