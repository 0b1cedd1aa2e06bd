//! The entity type record.

use record::{DecodeResult, FieldVisitor, VisitFields, WireRecord};
use stream::{BytesReader, BytesWriter};

record::wire_enum! {
    /// Top-level kind of a simulated entity.
    pub struct EntityKind(u8) {
        OTHER = 0, "Other";
        PLATFORM = 1, "Platform";
        MUNITION = 2, "Munition";
        LIFE_FORM = 3, "Life form";
        ENVIRONMENTAL = 4, "Environmental";
        CULTURAL_FEATURE = 5, "Cultural feature";
        SUPPLY = 6, "Supply";
        RADIO = 7, "Radio";
        EXPENDABLE = 8, "Expendable";
        SENSOR_EMITTER = 9, "Sensor/Emitter";
    }
}

record::wire_enum! {
    /// Operating domain of a platform entity.
    pub struct PlatformDomain(u8) {
        OTHER = 0, "Other";
        LAND = 1, "Land";
        AIR = 2, "Air";
        SURFACE = 3, "Surface";
        SUBSURFACE = 4, "Subsurface";
        SPACE = 5, "Space";
    }
}

/// Seven-level taxonomy describing what an entity is.
///
/// Category and below are table lookups owned by the enumeration
/// documents; the codec carries them as plain scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityType {
    pub kind: EntityKind,
    pub domain: PlatformDomain,
    pub country: u16,
    pub category: u8,
    pub subcategory: u8,
    pub specific: u8,
    pub extra: u8,
}

impl WireRecord for EntityType {
    fn wire_size(&self) -> usize {
        8
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_u8(self.kind.to_int());
        w.write_u8(self.domain.to_int());
        w.write_u16(self.country);
        w.write_u8(self.category);
        w.write_u8(self.subcategory);
        w.write_u8(self.specific);
        w.write_u8(self.extra);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            kind: EntityKind::from_int(r.read_u8()?),
            domain: PlatformDomain::from_int(r.read_u8()?),
            country: r.read_u16()?,
            category: r.read_u8()?,
            subcategory: r.read_u8()?,
            specific: r.read_u8()?,
            extra: r.read_u8()?,
        })
    }
}

impl VisitFields for EntityType {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("kind", self.kind.to_int().into());
        visitor.scalar("domain", self.domain.to_int().into());
        visitor.scalar("country", self.country.into());
        visitor.scalar("category", self.category.into());
        visitor.scalar("subcategory", self.subcategory.into());
        visitor.scalar("specific", self.specific.into());
        visitor.scalar("extra", self.extra.into());
    }
}
