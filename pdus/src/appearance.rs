//! Packed appearance words.
//!
//! The entity state PDU carries appearance as a single 32-bit word whose
//! interpretation depends on the entity's kind and domain. Each layout
//! below is a `packed_word!` view over the raw word; bits not named by a
//! layout are reserved and round-trip unchanged.

record::wire_enum! {
    /// General paint scheme.
    pub struct PaintScheme(u8) {
        UNIFORM_COLOR = 0, "Uniform color";
        CAMOUFLAGE = 1, "Camouflage";
    }
}

record::wire_enum! {
    /// Mobility kill state.
    pub struct Mobility(u8) {
        NO_MOBILITY_KILL = 0, "No mobility kill";
        MOBILITY_KILL = 1, "Mobility kill";
    }
}

record::wire_enum! {
    /// Fire-power kill state.
    pub struct FirePower(u8) {
        NO_FIRE_POWER_KILL = 0, "No fire-power kill";
        FIRE_POWER_KILL = 1, "Fire-power kill";
    }
}

record::wire_enum! {
    /// Propulsion kill state (air platforms).
    pub struct Propulsion(u8) {
        NO_PROPULSION_KILL = 0, "No propulsion kill";
        PROPULSION_KILL = 1, "Propulsion kill";
    }
}

record::wire_enum! {
    /// Damaged appearance.
    pub struct Damage(u8) {
        NO_DAMAGE = 0, "No damage";
        SLIGHT_DAMAGE = 1, "Slight damage";
        MODERATE_DAMAGE = 2, "Moderate damage";
        DESTROYED = 3, "Destroyed";
    }
}

record::wire_enum! {
    /// Status and location of smoke emanating from an entity.
    pub struct Smoke(u8) {
        NOT_SMOKING = 0, "Not smoking";
        SMOKE_PLUME = 1, "Smoke plume";
        ENGINE_SMOKE = 2, "Engine smoke";
        ENGINE_SMOKE_AND_PLUME = 3, "Engine smoke and smoke plume";
    }
}

record::wire_enum! {
    /// Size of dust or wake trailing the entity.
    pub struct TrailingEffects(u8) {
        NONE = 0, "None";
        SMALL = 1, "Small";
        MEDIUM = 2, "Medium";
        LARGE = 3, "Large";
    }
}

record::wire_enum! {
    /// Hatch or canopy position.
    pub struct Hatch(u8) {
        NOT_APPLICABLE = 0, "Not applicable";
        CLOSED = 1, "Closed";
        POPPED = 2, "Popped";
        POPPED_PERSON_VISIBLE = 3, "Popped, person visible";
        OPEN = 4, "Open";
        OPEN_PERSON_VISIBLE = 5, "Open, person visible";
    }
}

record::wire_enum! {
    /// A light set that is either off or on.
    pub struct Lights(u8) {
        OFF = 0, "Off";
        ON = 1, "On";
    }
}

record::wire_enum! {
    /// Visible flames.
    pub struct Flaming(u8) {
        NONE = 0, "None";
        PRESENT = 1, "Flames present";
    }
}

record::wire_enum! {
    /// Launcher or similar device raised.
    pub struct Launcher(u8) {
        NOT_RAISED = 0, "Not raised";
        RAISED = 1, "Raised";
    }
}

record::wire_enum! {
    /// Camouflage paint type.
    pub struct CamouflageType(u8) {
        DESERT = 0, "Desert camouflage";
        WINTER = 1, "Winter camouflage";
        FOREST = 2, "Forest camouflage";
        OTHER = 3, "Other";
    }
}

record::wire_enum! {
    /// Concealment state.
    pub struct Concealed(u8) {
        NOT_CONCEALED = 0, "Not concealed";
        CONCEALED = 1, "Concealed";
    }
}

record::wire_enum! {
    /// Frozen entities are not dead-reckoned.
    pub struct FrozenStatus(u8) {
        ACTIVE = 0, "Active";
        FROZEN = 1, "Frozen";
    }
}

record::wire_enum! {
    /// Power plant state.
    pub struct PowerPlant(u8) {
        OFF = 0, "Off";
        ON = 1, "On";
    }
}

record::wire_enum! {
    /// Whether the entity is active in the exercise.
    pub struct ActivityState(u8) {
        ACTIVE = 0, "Active";
        DEACTIVATED = 1, "Deactivated";
    }
}

record::wire_enum! {
    /// Tent extension state.
    pub struct Tent(u8) {
        NOT_EXTENDED = 0, "Not extended";
        EXTENDED = 1, "Extended";
    }
}

record::wire_enum! {
    /// Ramp position.
    pub struct Ramp(u8) {
        UP = 0, "Up";
        DOWN = 1, "Down";
    }
}

record::wire_enum! {
    /// Surrender state.
    pub struct Surrender(u8) {
        NOT_SURRENDERED = 0, "Not surrendered";
        SURRENDERED = 1, "Surrendered";
    }
}

record::wire_enum! {
    /// Masked or cloaked state.
    pub struct MaskedCloaked(u8) {
        NOT_MASKED = 0, "Not masked/not cloaked";
        MASKED = 1, "Masked/cloaked";
    }
}

record::wire_enum! {
    /// Afterburner state (air platforms).
    pub struct Afterburner(u8) {
        NOT_ON = 0, "Not on";
        ON = 1, "On";
    }
}

record::wire_enum! {
    /// Injury level of a life form.
    pub struct Health(u8) {
        NO_INJURY = 0, "No injury";
        SLIGHT_INJURY = 1, "Slight injury";
        MODERATE_INJURY = 2, "Moderate injury";
        FATAL_INJURY = 3, "Fatal injury";
    }
}

record::wire_enum! {
    /// Compliance state of a life form.
    pub struct Compliance(u8) {
        OTHER = 0, "Other";
        DETAINED = 1, "Detained";
        SURRENDER = 2, "Surrender";
        USING_FISTS = 3, "Using fists";
        VERBAL_ABUSE_1 = 4, "Verbal abuse level 1";
        VERBAL_ABUSE_2 = 5, "Verbal abuse level 2";
        VERBAL_ABUSE_3 = 6, "Verbal abuse level 3";
        PASSIVE_RESISTANCE_1 = 7, "Passive resistance level 1";
        PASSIVE_RESISTANCE_2 = 8, "Passive resistance level 2";
        PASSIVE_RESISTANCE_3 = 9, "Passive resistance level 3";
    }
}

record::wire_enum! {
    /// Posture of a life form.
    pub struct LifeFormState(u8) {
        NULL = 0, "Null";
        UPRIGHT_STANDING = 1, "Upright, standing still";
        UPRIGHT_WALKING = 2, "Upright, walking";
        UPRIGHT_RUNNING = 3, "Upright, running";
        KNEELING = 4, "Kneeling";
        PRONE = 5, "Prone";
        CRAWLING = 6, "Crawling";
        SWIMMING = 7, "Swimming";
        PARACHUTING = 8, "Parachuting";
        JUMPING = 9, "Jumping";
        SITTING = 10, "Sitting";
        SQUATTING = 11, "Squatting";
        CROUCHING = 12, "Crouching";
        WADING = 13, "Wading";
    }
}

record::wire_enum! {
    /// Primary or secondary weapon posture of a life form.
    pub struct Weapon(u8) {
        NOT_PRESENT = 0, "Not present";
        STOWED = 1, "Stowed";
        DEPLOYED = 2, "Deployed";
        FIRING_POSITION = 3, "In firing position";
    }
}

bitfield::packed_word! {
    /// Appearance of a land platform. Bit 20 and bits not named are
    /// reserved.
    pub struct LandPlatformAppearance(u32) {
        paint_scheme: PaintScheme = [0, 1],
        mobility: Mobility = [1, 1],
        fire_power: FirePower = [2, 1],
        damage: Damage = [3, 2],
        smoke: Smoke = [5, 2],
        trailing_effects: TrailingEffects = [7, 2],
        hatch: Hatch = [9, 3],
        head_lights: Lights = [12, 1],
        tail_lights: Lights = [13, 1],
        brake_lights: Lights = [14, 1],
        flaming: Flaming = [15, 1],
        launcher: Launcher = [16, 1],
        camouflage_type: CamouflageType = [17, 2],
        concealed: Concealed = [19, 1],
        frozen_status: FrozenStatus = [21, 1],
        power_plant: PowerPlant = [22, 1],
        state: ActivityState = [23, 1],
        tent: Tent = [24, 1],
        ramp: Ramp = [25, 1],
        blackout_lights: Lights = [26, 1],
        blackout_brake_lights: Lights = [27, 1],
        spot_lights: Lights = [28, 1],
        interior_lights: Lights = [29, 1],
        surrender_state: Surrender = [30, 1],
        masked_cloaked: MaskedCloaked = [31, 1],
    }
}

bitfield::packed_word! {
    /// Appearance of an air platform. Bits 2, 17-20 and 25-27 are
    /// reserved.
    pub struct AirPlatformAppearance(u32) {
        paint_scheme: PaintScheme = [0, 1],
        propulsion: Propulsion = [1, 1],
        damage: Damage = [3, 2],
        smoke: Smoke = [5, 2],
        trailing_effects: TrailingEffects = [7, 2],
        canopy: Hatch = [9, 3],
        landing_lights: Lights = [12, 1],
        navigation_lights: Lights = [13, 1],
        anti_collision_lights: Lights = [14, 1],
        flaming: Flaming = [15, 1],
        afterburner: Afterburner = [16, 1],
        frozen_status: FrozenStatus = [21, 1],
        power_plant: PowerPlant = [22, 1],
        state: ActivityState = [23, 1],
        formation_lights: Lights = [24, 1],
        spot_lights: Lights = [28, 1],
        interior_lights: Lights = [29, 1],
    }
}

bitfield::packed_word! {
    /// Appearance of a life form. Bits 1-2, 9-11 and 20-22 are reserved.
    pub struct LifeFormAppearance(u32) {
        paint_scheme: PaintScheme = [0, 1],
        health: Health = [3, 2],
        compliance: Compliance = [5, 4],
        flash_lights: Lights = [12, 1],
        life_form_state: LifeFormState = [16, 4],
        frozen_status: FrozenStatus = [21, 1],
        state: ActivityState = [23, 1],
        weapon_1: Weapon = [24, 2],
        weapon_2: Weapon = [26, 2],
        camouflage_type: CamouflageType = [28, 2],
        concealed_stationary: Concealed = [30, 1],
        concealed_movement: Concealed = [31, 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn land_hand_computed_word() {
        // damage = moderate (2) at bits 3-4, hatch = open (4) at bits
        // 9-11: word is 0x10 | 0x800.
        let word = LandPlatformAppearance::from_bits(0x0000_0810);
        assert_eq!(word.damage, Damage::MODERATE_DAMAGE);
        assert_eq!(word.hatch, Hatch::OPEN);
        assert_eq!(word.paint_scheme, PaintScheme::UNIFORM_COLOR);
        assert_eq!(word.to_bits(), 0x0000_0810);
    }

    #[test]
    fn land_encode_from_fields() {
        let mut word = LandPlatformAppearance::default();
        word.paint_scheme = PaintScheme::CAMOUFLAGE;
        word.damage = Damage::DESTROYED;
        word.flaming = Flaming::PRESENT;
        word.camouflage_type = CamouflageType::FOREST;
        assert_eq!(word.to_bits(), 0x1 | 0x18 | 0x8000 | (2 << 17));
    }

    #[test]
    fn land_reserved_bit_20_round_trips() {
        let raw = 1u32 << 20;
        let word = LandPlatformAppearance::from_bits(raw);
        assert_eq!(word.to_bits(), raw);
        assert_eq!(word, LandPlatformAppearance::default());
    }

    #[test]
    fn land_setting_a_field_leaves_others_default() {
        let mut word = LandPlatformAppearance::default();
        word.smoke = Smoke::ENGINE_SMOKE;
        assert_eq!(word.damage, Damage::NO_DAMAGE);
        assert_eq!(word.hatch, Hatch::NOT_APPLICABLE);
        assert_eq!(word.to_bits(), 2 << 5);
    }

    #[test]
    fn air_hand_computed_word() {
        // afterburner on (bit 16), canopy closed (1 at bits 9-11),
        // landing lights on (bit 12).
        let raw = (1 << 16) | (1 << 9) | (1 << 12);
        let word = AirPlatformAppearance::from_bits(raw);
        assert_eq!(word.afterburner, Afterburner::ON);
        assert_eq!(word.canopy, Hatch::CLOSED);
        assert_eq!(word.landing_lights, Lights::ON);
        assert_eq!(word.propulsion, Propulsion::NO_PROPULSION_KILL);
        assert_eq!(word.to_bits(), raw);
    }

    #[test]
    fn life_form_hand_computed_word() {
        // health = moderate (2 at bits 3-4), compliance = surrender
        // (2 at bits 5-8), posture = prone (5 at bits 16-19), weapon 1
        // deployed (2 at bits 24-25).
        let raw = (2 << 3) | (2 << 5) | (5 << 16) | (2 << 24);
        let word = LifeFormAppearance::from_bits(raw);
        assert_eq!(word.health, Health::MODERATE_INJURY);
        assert_eq!(word.compliance, Compliance::SURRENDER);
        assert_eq!(word.life_form_state, LifeFormState::PRONE);
        assert_eq!(word.weapon_1, Weapon::DEPLOYED);
        assert_eq!(word.weapon_2, Weapon::NOT_PRESENT);
        assert_eq!(word.to_bits(), raw);
    }

    #[test]
    fn life_form_undefined_posture_round_trips() {
        // Posture 15 has no assigned meaning; it must survive decode
        // and re-encode (enumerations are open).
        let raw = 15u32 << 16;
        let word = LifeFormAppearance::from_bits(raw);
        assert_eq!(word.life_form_state.to_int(), 15);
        assert_eq!(word.life_form_state.label(), None);
        assert_eq!(word.to_bits(), raw);
    }

    #[test]
    fn equality_ignores_reserved_bits_across_layouts() {
        let a = LandPlatformAppearance::from_bits(0x18);
        let b = LandPlatformAppearance::from_bits(0x18 | (1 << 20));
        assert_eq!(a, b);
        assert_ne!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn all_ones_word_round_trips_every_layout() {
        assert_eq!(LandPlatformAppearance::from_bits(u32::MAX).to_bits(), u32::MAX);
        assert_eq!(AirPlatformAppearance::from_bits(u32::MAX).to_bits(), u32::MAX);
        assert_eq!(LifeFormAppearance::from_bits(u32::MAX).to_bits(), u32::MAX);
    }
}
