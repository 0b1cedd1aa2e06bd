//! The `wire_enum!` macro for open wire enumerations.

/// Declares an enumeration wire type wrapping an integer.
///
/// Enumerations in this protocol are standard-versioned and gain values
/// over time, so decode must represent *any* bit pattern. The generated
/// type is an integer newtype with named constants for well-known
/// values: unknown values pass through untouched and round-trip exactly.
///
/// Adds impls for `From` in both directions and a `Debug` that prints
/// the label of well-known values. `to_bits`/`from_bits` widen through
/// `u32` so the type can double as a `packed_word!` sub-field.
///
/// # Example
///
/// ```
/// record::wire_enum! {
///     /// Detonation outcome.
///     pub struct DetonationResult(u8) {
///         ENTITY_IMPACT = 1, "Entity impact";
///         GROUND_IMPACT = 3, "Ground impact";
///     }
/// }
///
/// assert_eq!(DetonationResult::GROUND_IMPACT.to_int(), 3);
/// assert_eq!(DetonationResult::from_int(250).label(), None);
/// assert_eq!(DetonationResult::from_int(250).to_int(), 250);
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident($int:ty) {
            $(
                $(#[$vattr:meta])*
                $variant:ident = $value:expr, $label:expr;
            )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        $vis struct $name($int);

        impl $name {
            $(
                $(#[$vattr])*
                pub const $variant: Self = Self($value);
            )*

            /// Wraps a raw wire value.
            #[must_use]
            pub const fn from_int(value: $int) -> Self {
                Self(value)
            }

            /// Returns the raw wire value.
            #[must_use]
            pub const fn to_int(self) -> $int {
                self.0
            }

            /// Returns the standard's name for this value, if it has one.
            #[must_use]
            pub const fn label(self) -> Option<&'static str> {
                match self {
                    $( $name::$variant => Some($label), )*
                    _ => None,
                }
            }

            /// Widens the raw value for use as a packed-word sub-field.
            #[must_use]
            #[allow(clippy::cast_lossless)]
            pub const fn to_bits(self) -> u32 {
                self.0 as u32
            }

            /// Narrows a packed-word sub-field into this value.
            #[must_use]
            #[allow(clippy::cast_possible_truncation)]
            pub const fn from_bits(bits: u32) -> Self {
                Self(bits as $int)
            }
        }

        impl From<$int> for $name {
            fn from(value: $int) -> Self {
                Self::from_int(value)
            }
        }

        impl From<$name> for $int {
            fn from(value: $name) -> Self {
                value.to_int()
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self.label() {
                    Some(label) => {
                        write!(f, concat!(stringify!($name), "::{}"), label)
                    }
                    None => f.debug_tuple(stringify!($name)).field(&self.0).finish(),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::wire_enum! {
        /// Force affiliation used by the tests.
        struct Force(u8) {
            OTHER = 0, "Other";
            FRIENDLY = 1, "Friendly";
            OPPOSING = 2, "Opposing";
        }
    }

    #[test]
    fn known_values_have_labels() {
        assert_eq!(Force::FRIENDLY.label(), Some("Friendly"));
        assert_eq!(Force::FRIENDLY.to_int(), 1);
    }

    #[test]
    fn unknown_values_round_trip() {
        let force = Force::from_int(200);
        assert_eq!(force.label(), None);
        assert_eq!(force.to_int(), 200);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Force::default(), Force::OTHER);
    }

    #[test]
    fn from_impls() {
        let force: Force = 2u8.into();
        assert_eq!(force, Force::OPPOSING);
        let raw: u8 = force.into();
        assert_eq!(raw, 2);
    }

    #[test]
    fn bits_bridge_widens_and_narrows() {
        assert_eq!(Force::OPPOSING.to_bits(), 2);
        assert_eq!(Force::from_bits(1), Force::FRIENDLY);
    }

    #[test]
    fn debug_prints_label_or_raw() {
        assert_eq!(format!("{:?}", Force::FRIENDLY), "Force::Friendly");
        assert_eq!(format!("{:?}", Force::from_int(9)), "Force(9)");
    }

    #[test]
    fn ordering_follows_raw_value() {
        assert!(Force::OTHER < Force::FRIENDLY);
        assert!(Force::from_int(200) > Force::OPPOSING);
    }
}
