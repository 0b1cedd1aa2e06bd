//! The dead reckoning parameter record.

use record::{DecodeResult, FieldVisitor, VisitFields, WireRecord};
use stream::{BytesReader, BytesWriter};

use crate::geometry::Vector3Float;

record::wire_enum! {
    /// Extrapolation algorithm receivers apply between state updates.
    pub struct DeadReckoningAlgorithm(u8) {
        OTHER = 0, "Other";
        STATIC = 1, "Static";
        DRM_FPW = 2, "DRM(F, P, W)";
        DRM_RPW = 3, "DRM(R, P, W)";
        DRM_RVW = 4, "DRM(R, V, W)";
        DRM_FVW = 5, "DRM(F, V, W)";
        DRM_FPB = 6, "DRM(F, P, B)";
        DRM_RPB = 7, "DRM(R, P, B)";
        DRM_RVB = 8, "DRM(R, V, B)";
        DRM_FVB = 9, "DRM(F, V, B)";
    }
}

/// Parameters receivers use to extrapolate entity motion.
///
/// The fifteen "other parameters" bytes are algorithm-specific and
/// carried opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeadReckoningParameters {
    pub algorithm: DeadReckoningAlgorithm,
    pub other_parameters: [u8; 15],
    pub linear_acceleration: Vector3Float,
    pub angular_velocity: Vector3Float,
}

impl WireRecord for DeadReckoningParameters {
    fn wire_size(&self) -> usize {
        1 + 15 + self.linear_acceleration.wire_size() + self.angular_velocity.wire_size()
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_u8(self.algorithm.to_int());
        w.write_bytes(&self.other_parameters);
        self.linear_acceleration.encode(w);
        self.angular_velocity.encode(w);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        let algorithm = DeadReckoningAlgorithm::from_int(r.read_u8()?);
        let mut other_parameters = [0u8; 15];
        other_parameters.copy_from_slice(r.read_bytes(15)?);
        Ok(Self {
            algorithm,
            other_parameters,
            linear_acceleration: Vector3Float::decode(r)?,
            angular_velocity: Vector3Float::decode(r)?,
        })
    }
}

impl VisitFields for DeadReckoningParameters {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("algorithm", self.algorithm.to_int().into());
        visitor.bytes("other_parameters", &self.other_parameters);
        visitor.begin_record("linear_acceleration");
        self.linear_acceleration.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("angular_velocity");
        self.angular_velocity.visit_fields(visitor);
        visitor.end_record();
    }
}
