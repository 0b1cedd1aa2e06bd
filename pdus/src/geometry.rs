//! Vector and orientation records.

use record::{DecodeResult, FieldVisitor, VisitFields, WireRecord};
use stream::{BytesReader, BytesWriter};

/// Single-precision vector: velocities, accelerations, relative
/// locations in entity coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3Float {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3Float {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl WireRecord for Vector3Float {
    fn wire_size(&self) -> usize {
        12
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_f32(self.x);
        w.write_f32(self.y);
        w.write_f32(self.z);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            x: r.read_f32()?,
            y: r.read_f32()?,
            z: r.read_f32()?,
        })
    }
}

impl VisitFields for Vector3Float {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("x", self.x.into());
        visitor.scalar("y", self.y.into());
        visitor.scalar("z", self.z.into());
    }
}

/// Double-precision vector: world-coordinate locations.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3Double {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3Double {
    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl WireRecord for Vector3Double {
    fn wire_size(&self) -> usize {
        24
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_f64(self.x);
        w.write_f64(self.y);
        w.write_f64(self.z);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            x: r.read_f64()?,
            y: r.read_f64()?,
            z: r.read_f64()?,
        })
    }
}

impl VisitFields for Vector3Double {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("x", self.x.into());
        visitor.scalar("y", self.y.into());
        visitor.scalar("z", self.z.into());
    }
}

/// Euler angles describing an entity's orientation, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EulerAngles {
    pub psi: f32,
    pub theta: f32,
    pub phi: f32,
}

impl EulerAngles {
    /// Creates an orientation from its angles.
    #[must_use]
    pub const fn new(psi: f32, theta: f32, phi: f32) -> Self {
        Self { psi, theta, phi }
    }
}

impl WireRecord for EulerAngles {
    fn wire_size(&self) -> usize {
        12
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_f32(self.psi);
        w.write_f32(self.theta);
        w.write_f32(self.phi);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            psi: r.read_f32()?,
            theta: r.read_f32()?,
            phi: r.read_f32()?,
        })
    }
}

impl VisitFields for EulerAngles {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("psi", self.psi.into());
        visitor.scalar("theta", self.theta.into());
        visitor.scalar("phi", self.phi.into());
    }
}
