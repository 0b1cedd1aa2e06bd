//! The entity marking record.

use record::{DecodeResult, FieldVisitor, VisitFields, WireRecord};
use stream::{BytesReader, BytesWriter};

record::wire_enum! {
    /// Interpretation of the marking characters.
    pub struct MarkingCharacterSet(u8) {
        UNUSED = 0, "Unused";
        ASCII = 1, "ASCII";
        ARMY_MARKING = 2, "Army marking (CCTT)";
        DIGIT_CHEVRON = 3, "Digit chevron";
    }
}

/// Eleven characters drawn on the side of an entity, used for
/// debugging or distinguishing otherwise identical entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marking {
    pub character_set: MarkingCharacterSet,
    pub characters: [u8; 11],
}

impl Marking {
    /// Creates an ASCII marking from a string, truncating after eleven
    /// bytes and padding shorter inputs with zeros.
    #[must_use]
    pub fn ascii(text: &str) -> Self {
        let mut characters = [0u8; 11];
        for (slot, byte) in characters.iter_mut().zip(text.bytes()) {
            *slot = byte;
        }
        Self {
            character_set: MarkingCharacterSet::ASCII,
            characters,
        }
    }

    /// Returns the characters as a string, zero padding stripped.
    ///
    /// Non-ASCII bytes are replaced; markings in other character sets
    /// are returned as-is for whatever they decode to.
    #[must_use]
    pub fn text(&self) -> String {
        let end = self
            .characters
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(self.characters.len());
        String::from_utf8_lossy(&self.characters[..end]).into_owned()
    }
}

impl WireRecord for Marking {
    fn wire_size(&self) -> usize {
        12
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_u8(self.character_set.to_int());
        w.write_bytes(&self.characters);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        let character_set = MarkingCharacterSet::from_int(r.read_u8()?);
        let mut characters = [0u8; 11];
        characters.copy_from_slice(r.read_bytes(11)?);
        Ok(Self {
            character_set,
            characters,
        })
    }
}

impl VisitFields for Marking {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("character_set", self.character_set.to_int().into());
        visitor.bytes("characters", &self.characters);
    }
}
