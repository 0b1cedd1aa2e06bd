//! Header-level addressing records.
//!
//! Site, application and entity/event numbers are opaque to the codec;
//! they identify the simulation session and participant.

use record::{DecodeResult, FieldVisitor, VisitFields, WireRecord};
use stream::{BytesReader, BytesWriter};

/// Triplet uniquely identifying one entity in an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityId {
    /// Site the entity is simulated at.
    pub site: u16,
    /// Application within the site.
    pub application: u16,
    /// Entity number within the application.
    pub entity: u16,
}

impl EntityId {
    /// Creates an entity identifier.
    #[must_use]
    pub const fn new(site: u16, application: u16, entity: u16) -> Self {
        Self {
            site,
            application,
            entity,
        }
    }
}

impl WireRecord for EntityId {
    fn wire_size(&self) -> usize {
        6
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_u16(self.site);
        w.write_u16(self.application);
        w.write_u16(self.entity);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            site: r.read_u16()?,
            application: r.read_u16()?,
            entity: r.read_u16()?,
        })
    }
}

impl VisitFields for EntityId {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("site", self.site.into());
        visitor.scalar("application", self.application.into());
        visitor.scalar("entity", self.entity.into());
    }
}

/// Triplet identifying one event, numbered per issuing application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventId {
    /// Site the event originated from.
    pub site: u16,
    /// Application within the site.
    pub application: u16,
    /// Sequential event number.
    pub event: u16,
}

impl EventId {
    /// Creates an event identifier.
    #[must_use]
    pub const fn new(site: u16, application: u16, event: u16) -> Self {
        Self {
            site,
            application,
            event,
        }
    }
}

impl WireRecord for EventId {
    fn wire_size(&self) -> usize {
        6
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_u16(self.site);
        w.write_u16(self.application);
        w.write_u16(self.event);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            site: r.read_u16()?,
            application: r.read_u16()?,
            event: r.read_u16()?,
        })
    }
}

impl VisitFields for EventId {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("site", self.site.into());
        visitor.scalar("application", self.application.into());
        visitor.scalar("event", self.event.into());
    }
}
