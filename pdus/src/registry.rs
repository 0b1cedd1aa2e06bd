//! The standard kind-to-body registry.

use wire::PduRegistry;

use crate::collision::CollisionPdu;
use crate::data::DataPdu;
use crate::detonation::DetonationPdu;
use crate::emissions::ElectronicEmissionsPdu;
use crate::entity_state::EntityStatePdu;
use crate::fire::FirePdu;

/// Builds a registry covering every PDU kind this crate implements.
///
/// Applications extend the result (or build their own) by registering
/// additional [`wire::PduBody`] types.
#[must_use]
pub fn standard_registry() -> PduRegistry {
    let mut registry = PduRegistry::new();
    registry.register::<EntityStatePdu>();
    registry.register::<FirePdu>();
    registry.register::<DetonationPdu>();
    registry.register::<CollisionPdu>();
    registry.register::<DataPdu>();
    registry.register::<ElectronicEmissionsPdu>();
    registry
}
