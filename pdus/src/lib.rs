//! Concrete PDU and sub-record types for the dispdu codec.
//!
//! Each type here is a mechanical instantiation of the generic codec
//! patterns: a declarative field list in wire order, encoded and decoded
//! through [`record::WireRecord`], with open enumerations from
//! `record::wire_enum!` and packed appearance words from
//! `bitfield::packed_word!`. Derived wire fields (list counts, record
//! word budgets, the envelope length) are always recomputed from the
//! in-memory state at encode time.
//!
//! [`standard_registry`] wires the implemented PDU kinds into a
//! [`wire::PduRegistry`] for dispatch.

mod appearance;
mod articulation;
mod collision;
mod data;
mod datum;
mod dead_reckoning;
mod detonation;
mod emissions;
mod entity_state;
mod entity_type;
mod fire;
mod geometry;
mod ids;
mod marking;
mod munition;
mod registry;

pub use appearance::{
    ActivityState, Afterburner, AirPlatformAppearance, CamouflageType, Compliance, Concealed,
    Damage, FirePower, Flaming, FrozenStatus, Hatch, Health, LandPlatformAppearance, Launcher,
    LifeFormAppearance, LifeFormState, Lights, MaskedCloaked, Mobility, PaintScheme, PowerPlant,
    Propulsion, Ramp, Smoke, Surrender, Tent, TrailingEffects, Weapon,
};
pub use articulation::{ArticulationParameter, ParameterTypeDesignator};
pub use collision::{CollisionPdu, CollisionType};
pub use data::DataPdu;
pub use datum::{FixedDatum, VariableDatum};
pub use dead_reckoning::{DeadReckoningAlgorithm, DeadReckoningParameters};
pub use detonation::{DetonationPdu, DetonationResult};
pub use emissions::{
    BeamFunction, ElectronicEmissionsPdu, EmissionBeam, EmissionSystem, EmitterFunction,
    EmitterSystem, FundamentalParameterData, HighDensityTrackJam, StateUpdateIndicator,
    TrackJamTarget,
};
pub use entity_state::{EntityStatePdu, ForceId};
pub use entity_type::{EntityKind, EntityType, PlatformDomain};
pub use fire::FirePdu;
pub use geometry::{EulerAngles, Vector3Double, Vector3Float};
pub use ids::{EntityId, EventId};
pub use marking::{Marking, MarkingCharacterSet};
pub use munition::MunitionDescriptor;
pub use registry::standard_registry;
