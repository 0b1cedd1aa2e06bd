//! The `packed_word!` macro for declaring appearance-style records.

/// Declares a 32-bit packed-word record as a list of named sub-fields.
///
/// Each sub-field names a type exposing `from_bits(u32) -> Self` and
/// `to_bits(self) -> u32` (the `record::wire_enum!` macro generates both)
/// and a `[offset, width]` bit range. The generated struct:
///
/// - decodes with [`BitField::extract`](crate::BitField::extract)
///   semantics (mask first, then shift),
/// - captures every bit not covered by a named sub-field in a private
///   `reserved` field so undefined bits survive a decode/encode
///   round-trip unchanged,
/// - compares and hashes by named sub-fields only, so reserved bits
///   never affect equality,
/// - defaults to the all-zero word,
/// - rejects overlapping sub-field ranges at compile time.
///
/// # Example
///
/// ```
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// pub struct Toggle(u32);
///
/// impl Toggle {
///     pub fn from_bits(bits: u32) -> Self { Self(bits) }
///     pub fn to_bits(self) -> u32 { self.0 }
/// }
///
/// bitfield::packed_word! {
///     /// A two-switch status word.
///     pub struct Status(u32) {
///         power: Toggle = [0, 1],
///         lights: Toggle = [4, 2],
///     }
/// }
///
/// let status = Status::from_bits(0x31);
/// assert_eq!(status.power.to_bits(), 1);
/// assert_eq!(status.lights.to_bits(), 3);
/// assert_eq!(status.to_bits(), 0x31);
/// ```
#[macro_export]
macro_rules! packed_word {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident(u32) {
            $(
                $(#[$fattr:meta])*
                $field:ident : $fty:ty = [$off:literal, $wid:literal]
            ),+ $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name {
            $(
                $(#[$fattr])*
                pub $field: $fty,
            )+
            reserved: u32,
        }

        impl $name {
            /// Bits covered by named sub-fields; the rest are reserved.
            pub const ASSIGNED_MASK: u32 =
                $( $crate::BitField::new($off, $wid).mask() )|+;

            /// Decodes a raw word, keeping unassigned bits for round-trip.
            ///
            /// Undefined sub-field values are preserved numerically; this
            /// never fails.
            #[must_use]
            pub fn from_bits(raw: u32) -> Self {
                Self {
                    $(
                        $field: <$fty>::from_bits(
                            $crate::BitField::new($off, $wid).extract(raw),
                        ),
                    )+
                    reserved: raw & !Self::ASSIGNED_MASK,
                }
            }

            /// Encodes the sub-fields into a raw word, restoring the
            /// unassigned bits captured at decode time.
            #[must_use]
            pub fn to_bits(&self) -> u32 {
                let mut raw = self.reserved;
                $(
                    raw = $crate::BitField::new($off, $wid)
                        .insert(raw, self.$field.to_bits());
                )+
                raw
            }

            /// Returns the unassigned bits carried through from decode.
            #[must_use]
            pub const fn reserved_bits(&self) -> u32 {
                self.reserved
            }
        }

        // Sub-field ranges must be disjoint.
        const _: () = {
            let combined = $name::ASSIGNED_MASK.count_ones();
            let summed = 0u32
                $( + $crate::BitField::new($off, $wid).mask().count_ones() )+;
            assert!(combined == summed, "overlapping sub-field ranges");
        };

        impl Default for $name {
            fn default() -> Self {
                Self::from_bits(0)
            }
        }

        // Reserved bits are wire noise: equality and hashing cover the
        // named sub-fields only.
        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                true $( && self.$field == other.$field )+
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $( self.$field.hash(state); )+
            }
        }
    };
}

#[cfg(test)]
mod tests {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    struct Level(u32);

    impl Level {
        fn from_bits(bits: u32) -> Self {
            Self(bits)
        }

        fn to_bits(self) -> u32 {
            self.0
        }
    }

    crate::packed_word! {
        /// Word used by the tests: two single-bit flags and one
        /// two-bit level, with bits 2 and 5..=31 reserved.
        struct TestWord(u32) {
            alpha: Level = [0, 1],
            beta: Level = [1, 1],
            gamma: Level = [3, 2],
        }
    }

    #[test]
    fn assigned_mask_covers_declared_ranges() {
        assert_eq!(TestWord::ASSIGNED_MASK, 0b11011);
    }

    #[test]
    fn from_bits_extracts_each_field() {
        let word = TestWord::from_bits(0b01011);
        assert_eq!(word.alpha.to_bits(), 1);
        assert_eq!(word.beta.to_bits(), 1);
        assert_eq!(word.gamma.to_bits(), 0b01);
    }

    #[test]
    fn to_bits_restores_reserved_bits() {
        let raw = 0xFFFF_FF04 | 0b01011;
        let word = TestWord::from_bits(raw);
        assert_eq!(word.reserved_bits(), 0xFFFF_FF04 & !0b11011);
        assert_eq!(word.to_bits(), raw);
    }

    #[test]
    fn equality_ignores_reserved_bits() {
        let a = TestWord::from_bits(0b01011);
        let b = TestWord::from_bits(0b01011 | (0xFFFF_FF00 & !0b11011));
        assert_eq!(a, b);
    }

    #[test]
    fn equality_observes_named_fields() {
        let a = TestWord::from_bits(0b00001);
        let b = TestWord::from_bits(0b00010);
        assert_ne!(a, b);
    }

    #[test]
    fn hash_ignores_reserved_bits() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |word: &TestWord| {
            let mut hasher = DefaultHasher::new();
            word.hash(&mut hasher);
            hasher.finish()
        };

        let a = TestWord::from_bits(0b01011);
        let b = TestWord::from_bits(0b01011 | 0x0000_0100);
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn default_is_zero_word() {
        let word = TestWord::default();
        assert_eq!(word.to_bits(), 0);
    }

    #[test]
    fn setting_one_field_leaves_others_zero() {
        let mut word = TestWord::default();
        word.gamma = Level::from_bits(0b11);
        assert_eq!(word.alpha.to_bits(), 0);
        assert_eq!(word.beta.to_bits(), 0);
        assert_eq!(word.to_bits(), 0b11000);
    }

    #[test]
    fn undefined_field_value_roundtrips() {
        // gamma = 0b10 has no meaning assigned by the tests; it must
        // still survive decode and re-encode.
        let word = TestWord::from_bits(0b10000);
        assert_eq!(word.gamma.to_bits(), 0b10);
        assert_eq!(word.to_bits(), 0b10000);
    }
}
