//! The electromagnetic emission PDU and its nested records.
//!
//! Emission systems and beams carry their own lengths in 32-bit words,
//! covering the record that declares them. Those budgets are recomputed
//! from `wire_size` on encode and enforced exactly on decode, alongside
//! the explicit beam and target counts: the two list conventions of the
//! wire format nested in one PDU.

use record::{
    decode_counted, decode_sized_list, encode_list, list_wire_size, DecodeError, DecodeResult,
    FieldVisitor, VisitFields, WireRecord,
};
use stream::{BytesReader, BytesWriter};
use wire::{PduBody, PduKind, ProtocolFamily};

use crate::geometry::Vector3Float;
use crate::ids::{EntityId, EventId};

record::wire_enum! {
    /// Why the emission state is being sent.
    pub struct StateUpdateIndicator(u8) {
        HEARTBEAT_UPDATE = 0, "Heartbeat update";
        CHANGED_DATA_UPDATE = 1, "Changed data update";
    }
}

record::wire_enum! {
    /// Function of an emitter system.
    pub struct EmitterFunction(u8) {
        OTHER = 0, "Other";
        MULTI_FUNCTION = 1, "Multi-function";
        EARLY_WARNING_SURVEILLANCE = 2, "Early warning/surveillance";
        HEIGHT_FINDING = 3, "Height finding";
        FIRE_CONTROL = 4, "Fire control";
        ACQUISITION_DETECTION = 5, "Acquisition/detection";
        TRACKING = 6, "Tracking";
        GUIDANCE_ILLUMINATION = 7, "Guidance/illumination";
        FIRING_POINT_LOCATION = 8, "Firing point/launch point location";
        RANGING = 9, "Ranging";
        RADAR_ALTIMETER = 10, "Radar altimeter";
        IMAGING = 11, "Imaging";
        MOTION_DETECTION = 12, "Motion detection";
        NAVIGATION = 13, "Navigation";
    }
}

record::wire_enum! {
    /// Function of a single beam.
    pub struct BeamFunction(u8) {
        OTHER = 0, "Other";
        SEARCH = 1, "Search";
        HEIGHT_FINDER = 2, "Height finder";
        ACQUISITION = 3, "Acquisition";
        TRACKING = 4, "Tracking";
        ACQUISITION_AND_TRACKING = 5, "Acquisition and tracking";
        COMMAND_GUIDANCE = 6, "Command guidance";
        ILLUMINATION = 7, "Illumination";
        RANGE_ONLY_RADAR = 8, "Range only radar";
        MISSILE_BEACON = 9, "Missile beacon";
        MISSILE_FUZE = 10, "Missile fuze";
        ACTIVE_RADAR_MISSILE_SEEKER = 11, "Active radar missile seeker";
        JAMMER = 12, "Jammer";
    }
}

record::wire_enum! {
    /// Whether the beam jams all targets in the scan volume.
    pub struct HighDensityTrackJam(u8) {
        NOT_SELECTED = 0, "Not selected";
        SELECTED = 1, "Selected";
    }
}

/// Identifies one emitter system on an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmitterSystem {
    /// Emitter name from the enumeration tables.
    pub name: u16,
    pub function: EmitterFunction,
    /// Distinguishes multiple emitters of the same name on one entity.
    pub emitter_id: u8,
}

impl WireRecord for EmitterSystem {
    fn wire_size(&self) -> usize {
        4
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_u16(self.name);
        w.write_u8(self.function.to_int());
        w.write_u8(self.emitter_id);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            name: r.read_u16()?,
            function: EmitterFunction::from_int(r.read_u8()?),
            emitter_id: r.read_u8()?,
        })
    }
}

impl VisitFields for EmitterSystem {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("name", self.name.into());
        visitor.scalar("function", self.function.to_int().into());
        visitor.scalar("emitter_id", self.emitter_id.into());
    }
}

/// Radio-frequency parameters of one beam.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FundamentalParameterData {
    /// Center frequency in hertz.
    pub frequency: f32,
    pub frequency_range: f32,
    /// Effective radiated power in dBm.
    pub effective_radiated_power: f32,
    pub pulse_repetition_frequency: f32,
    /// Pulse width in microseconds.
    pub pulse_width: f32,
    pub beam_azimuth_center: f32,
    pub beam_azimuth_sweep: f32,
    pub beam_elevation_center: f32,
    pub beam_elevation_sweep: f32,
    /// Percentage of the sweep completed.
    pub beam_sweep_sync: f32,
}

impl WireRecord for FundamentalParameterData {
    fn wire_size(&self) -> usize {
        40
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_f32(self.frequency);
        w.write_f32(self.frequency_range);
        w.write_f32(self.effective_radiated_power);
        w.write_f32(self.pulse_repetition_frequency);
        w.write_f32(self.pulse_width);
        w.write_f32(self.beam_azimuth_center);
        w.write_f32(self.beam_azimuth_sweep);
        w.write_f32(self.beam_elevation_center);
        w.write_f32(self.beam_elevation_sweep);
        w.write_f32(self.beam_sweep_sync);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            frequency: r.read_f32()?,
            frequency_range: r.read_f32()?,
            effective_radiated_power: r.read_f32()?,
            pulse_repetition_frequency: r.read_f32()?,
            pulse_width: r.read_f32()?,
            beam_azimuth_center: r.read_f32()?,
            beam_azimuth_sweep: r.read_f32()?,
            beam_elevation_center: r.read_f32()?,
            beam_elevation_sweep: r.read_f32()?,
            beam_sweep_sync: r.read_f32()?,
        })
    }
}

impl VisitFields for FundamentalParameterData {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("frequency", self.frequency.into());
        visitor.scalar("frequency_range", self.frequency_range.into());
        visitor.scalar(
            "effective_radiated_power",
            self.effective_radiated_power.into(),
        );
        visitor.scalar(
            "pulse_repetition_frequency",
            self.pulse_repetition_frequency.into(),
        );
        visitor.scalar("pulse_width", self.pulse_width.into());
        visitor.scalar("beam_azimuth_center", self.beam_azimuth_center.into());
        visitor.scalar("beam_azimuth_sweep", self.beam_azimuth_sweep.into());
        visitor.scalar("beam_elevation_center", self.beam_elevation_center.into());
        visitor.scalar("beam_elevation_sweep", self.beam_elevation_sweep.into());
        visitor.scalar("beam_sweep_sync", self.beam_sweep_sync.into());
    }
}

/// One entity a beam is tracking or jamming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackJamTarget {
    pub entity_id: EntityId,
    pub emitter_id: u8,
    pub beam_id: u8,
}

impl WireRecord for TrackJamTarget {
    fn wire_size(&self) -> usize {
        self.entity_id.wire_size() + 1 + 1
    }

    fn encode(&self, w: &mut BytesWriter) {
        self.entity_id.encode(w);
        w.write_u8(self.emitter_id);
        w.write_u8(self.beam_id);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        Ok(Self {
            entity_id: EntityId::decode(r)?,
            emitter_id: r.read_u8()?,
            beam_id: r.read_u8()?,
        })
    }
}

impl VisitFields for TrackJamTarget {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.begin_record("entity_id");
        self.entity_id.visit_fields(visitor);
        visitor.end_record();
        visitor.scalar("emitter_id", self.emitter_id.into());
        visitor.scalar("beam_id", self.beam_id.into());
    }
}

/// One beam of an emitter system.
///
/// The wire carries the beam's length in 32-bit words ahead of its
/// contents. Encode derives it from `wire_size`; decode bounds every
/// read by it and requires exact consumption.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmissionBeam {
    /// Distinguishes beams within one emitter system.
    pub beam_id: u8,
    /// Index into the database of beam parameters.
    pub beam_parameter_index: u16,
    pub fundamental_parameters: FundamentalParameterData,
    pub beam_function: BeamFunction,
    pub high_density_track_jam: HighDensityTrackJam,
    /// Wire padding, zero on encode.
    pub pad: u8,
    pub jamming_mode_sequence: u32,
    pub track_jam_targets: Vec<TrackJamTarget>,
}

impl EmissionBeam {
    // Length byte, beam id, parameter index, fundamental block,
    // function, target count, high density flag, pad, jamming mode.
    const FIXED_SIZE: usize = 1 + 1 + 2 + 40 + 1 + 1 + 1 + 1 + 4;

    /// Length in 32-bit words written ahead of the beam contents.
    #[must_use]
    pub fn data_length_words(&self) -> u8 {
        (self.wire_size() / 4) as u8
    }
}

impl WireRecord for EmissionBeam {
    fn wire_size(&self) -> usize {
        Self::FIXED_SIZE + list_wire_size(&self.track_jam_targets)
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_u8(self.data_length_words());
        w.write_u8(self.beam_id);
        w.write_u16(self.beam_parameter_index);
        self.fundamental_parameters.encode(w);
        w.write_u8(self.beam_function.to_int());
        w.write_u8(self.track_jam_targets.len() as u8);
        w.write_u8(self.high_density_track_jam.to_int());
        w.write_u8(self.pad);
        w.write_u32(self.jamming_mode_sequence);
        encode_list(&self.track_jam_targets, w);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        let data_length = r.read_u8()?;
        let declared = usize::from(data_length) * 4;
        // The word budget covers the length byte itself.
        let Some(budget) = declared.checked_sub(1) else {
            return Err(DecodeError::BudgetMismatch {
                budget: declared,
                consumed: 1,
            });
        };
        let mut sub = r.take(budget)?;

        let beam_id = sub.read_u8()?;
        let beam_parameter_index = sub.read_u16()?;
        let fundamental_parameters = FundamentalParameterData::decode(&mut sub)?;
        let beam_function = BeamFunction::from_int(sub.read_u8()?);
        let target_count = sub.read_u8()?;
        let high_density_track_jam = HighDensityTrackJam::from_int(sub.read_u8()?);
        let pad = sub.read_u8()?;
        let jamming_mode_sequence = sub.read_u32()?;
        let track_jam_targets = decode_counted(&mut sub, usize::from(target_count))?;
        if !sub.is_empty() {
            return Err(DecodeError::BudgetMismatch {
                budget: declared,
                consumed: declared - sub.remaining(),
            });
        }
        Ok(Self {
            beam_id,
            beam_parameter_index,
            fundamental_parameters,
            beam_function,
            high_density_track_jam,
            pad,
            jamming_mode_sequence,
            track_jam_targets,
        })
    }
}

impl VisitFields for EmissionBeam {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("beam_data_length", self.data_length_words().into());
        visitor.scalar("beam_id", self.beam_id.into());
        visitor.scalar("beam_parameter_index", self.beam_parameter_index.into());
        visitor.begin_record("fundamental_parameters");
        self.fundamental_parameters.visit_fields(visitor);
        visitor.end_record();
        visitor.scalar("beam_function", self.beam_function.to_int().into());
        visitor.scalar(
            "high_density_track_jam",
            self.high_density_track_jam.to_int().into(),
        );
        visitor.scalar("pad", self.pad.into());
        visitor.scalar("jamming_mode_sequence", self.jamming_mode_sequence.into());
        visitor.begin_list("track_jam_targets", self.track_jam_targets.len());
        for target in &self.track_jam_targets {
            visitor.begin_record("track_jam_target");
            target.visit_fields(visitor);
            visitor.end_record();
        }
        visitor.end_list();
    }
}

/// One emitter system and its beams.
///
/// Like the beam, the system declares its own length in 32-bit words.
/// Decode reads beams until that budget is exhausted and cross-checks
/// the result against the explicit beam count.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EmissionSystem {
    /// Wire padding, zero on encode.
    pub padding: u16,
    pub emitter_system: EmitterSystem,
    /// Emitter location relative to the entity.
    pub location: Vector3Float,
    pub beams: Vec<EmissionBeam>,
}

impl EmissionSystem {
    // Length byte, beam count, padding, emitter system, location.
    const FIXED_SIZE: usize = 1 + 1 + 2 + 4 + 12;

    /// Length in 32-bit words written ahead of the system contents.
    #[must_use]
    pub fn data_length_words(&self) -> u8 {
        (self.wire_size() / 4) as u8
    }
}

impl WireRecord for EmissionSystem {
    fn wire_size(&self) -> usize {
        Self::FIXED_SIZE + list_wire_size(&self.beams)
    }

    fn encode(&self, w: &mut BytesWriter) {
        w.write_u8(self.data_length_words());
        w.write_u8(self.beams.len() as u8);
        w.write_u16(self.padding);
        self.emitter_system.encode(w);
        self.location.encode(w);
        encode_list(&self.beams, w);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        let data_length = r.read_u8()?;
        let declared = usize::from(data_length) * 4;
        let Some(budget) = declared.checked_sub(1) else {
            return Err(DecodeError::BudgetMismatch {
                budget: declared,
                consumed: 1,
            });
        };
        let mut sub = r.take(budget)?;

        let beam_count = sub.read_u8()?;
        let padding = sub.read_u16()?;
        let emitter_system = EmitterSystem::decode(&mut sub)?;
        let location = Vector3Float::decode(&mut sub)?;
        let remaining = sub.remaining();
        let beams: Vec<EmissionBeam> = decode_sized_list(&mut sub, remaining)?;
        if beams.len() != usize::from(beam_count) {
            return Err(DecodeError::CountMismatch {
                declared: usize::from(beam_count),
                actual: beams.len(),
            });
        }
        Ok(Self {
            padding,
            emitter_system,
            location,
            beams,
        })
    }
}

impl VisitFields for EmissionSystem {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.scalar("system_data_length", self.data_length_words().into());
        visitor.scalar("padding", self.padding.into());
        visitor.begin_record("emitter_system");
        self.emitter_system.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("location");
        self.location.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_list("beams", self.beams.len());
        for beam in &self.beams {
            visitor.begin_record("beam");
            beam.visit_fields(visitor);
            visitor.end_record();
        }
        visitor.end_list();
    }
}

/// Electromagnetic emissions of an entity's active systems.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElectronicEmissionsPdu {
    pub emitting_entity_id: EntityId,
    pub event_id: EventId,
    pub state_update_indicator: StateUpdateIndicator,
    /// Wire padding, zero on encode.
    pub padding: u16,
    pub systems: Vec<EmissionSystem>,
}

impl WireRecord for ElectronicEmissionsPdu {
    fn wire_size(&self) -> usize {
        self.emitting_entity_id.wire_size()
            + self.event_id.wire_size()
            + 1
            + 1
            + 2
            + list_wire_size(&self.systems)
    }

    fn encode(&self, w: &mut BytesWriter) {
        self.emitting_entity_id.encode(w);
        self.event_id.encode(w);
        w.write_u8(self.state_update_indicator.to_int());
        w.write_u8(self.systems.len() as u8);
        w.write_u16(self.padding);
        encode_list(&self.systems, w);
    }

    fn decode(r: &mut BytesReader<'_>) -> DecodeResult<Self> {
        let emitting_entity_id = EntityId::decode(r)?;
        let event_id = EventId::decode(r)?;
        let state_update_indicator = StateUpdateIndicator::from_int(r.read_u8()?);
        let system_count = r.read_u8()?;
        let padding = r.read_u16()?;
        Ok(Self {
            emitting_entity_id,
            event_id,
            state_update_indicator,
            padding,
            systems: decode_counted(r, usize::from(system_count))?,
        })
    }
}

impl VisitFields for ElectronicEmissionsPdu {
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        visitor.begin_record("emitting_entity_id");
        self.emitting_entity_id.visit_fields(visitor);
        visitor.end_record();
        visitor.begin_record("event_id");
        self.event_id.visit_fields(visitor);
        visitor.end_record();
        visitor.scalar(
            "state_update_indicator",
            self.state_update_indicator.to_int().into(),
        );
        visitor.scalar("padding", self.padding.into());
        visitor.begin_list("systems", self.systems.len());
        for system in &self.systems {
            visitor.begin_record("system");
            system.visit_fields(visitor);
            visitor.end_record();
        }
        visitor.end_list();
    }
}

impl PduBody for ElectronicEmissionsPdu {
    const KIND: PduKind = PduKind::ELECTROMAGNETIC_EMISSION;
    const FAMILY: ProtocolFamily = ProtocolFamily::DISTRIBUTED_EMISSION_REGENERATION;
}
