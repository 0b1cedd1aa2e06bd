//! Fixed and variable datum records.
//!
//! Simulation management PDUs carry key/value data as two trailing
//! lists: fixed datums (one 32-bit value each) and variable datums
//! (a bit length plus 64-bit chunks). The variable datum is the
//! length-describing list convention: its payload size on the wire is
//! derived from the declared bit length, never from a cached count.

use record::{DecodeResult, FieldVisitor, VisitFields, WireRecord};
use stream::{BytesReader, BytesWriter};

/// A datum with a fixed 32-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedDatum {
    /// Datum identifier from the enumeration tables.
    pub datum_id: u32,
    pub value: u32,
}

impl FixedDatum {
    /// Creates a fixed datum.
    #[must_use]
    pub const fn new(datum_id: u32, value: u32) -> Self {
        Self { datum_id, value }
    }
}

impl WireRecord for FixedDatum {
    fn wire_size(&self) -> usize {
        8
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_u32(self.datum_id);
        w.write_u32(self.value);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            datum_id: r.read_u32()?,
            value: r.read_u32()?,
        })
    }
}

impl VisitFields for FixedDatum {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("datum_id", self.datum_id.into());
        visitor.scalar("value", self.value.into());
    }
}

/// A datum whose value is a bit string padded to 64-bit chunks.
///
/// `data` always holds the padded wire bytes (a multiple of eight), so
/// non-zero padding received off the wire survives a round-trip.
/// `length_bits` declares how many of those bits are meaningful.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariableDatum {
    /// Datum identifier from the enumeration tables.
    pub datum_id: u32,
    /// Meaningful length of the value in bits.
    pub length_bits: u32,
    /// Value bytes, zero-padded to a multiple of eight.
    pub data: Vec<u8>,
}

impl VariableDatum {
    /// Creates a variable datum from payload bytes, setting the bit
    /// length and padding to the next 64-bit boundary.
    #[must_use]
    pub fn from_bytes(datum_id: u32, payload: &[u8]) -> Self {
        let mut data = payload.to_vec();
        let padded = payload.len().div_ceil(8) * 8;
        data.resize(padded, 0);
        Self {
            datum_id,
            length_bits: (payload.len() * 8) as u32,
            data,
        }
    }

    /// Returns the meaningful payload bytes, padding stripped.
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        let meaningful = (self.length_bits as usize).div_ceil(8);
        &self.data[..meaningful.min(self.data.len())]
    }

    /// Number of 64-bit chunks the declared bit length occupies.
    fn chunks(length_bits: u32) -> usize {
        (length_bits as usize).div_ceil(64)
    }
}

impl WireRecord for VariableDatum {
    fn wire_size(&self) -> usize {
        4 + 4 + self.data.len()
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_u32(self.datum_id);
        w.write_u32(self.length_bits);
        w.write_bytes(&self.data);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        let datum_id = r.read_u32()?;
        let length_bits = r.read_u32()?;
        let data = r.read_bytes(Self::chunks(length_bits) * 8)?.to_vec();
        Ok(Self {
            datum_id,
            length_bits,
            data,
        })
    }
}

impl VisitFields for VariableDatum {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("datum_id", self.datum_id.into());
        visitor.scalar("length_bits", self.length_bits.into());
        visitor.bytes("data", &self.data);
    }
}
