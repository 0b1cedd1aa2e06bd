//! Packed-word sub-field primitives for the dispdu codec.
//!
//! Many PDU records fold a set of small enumerations into a single
//! 32-bit word (the "appearance" pattern). This crate provides
//! [`BitField`] for individual (offset, width) sub-field access and the
//! [`packed_word!`] macro for declaring whole words as typed structs.
//!
//! # Design Principles
//!
//! - **Mask, then shift** - Sub-field extraction computes
//!   `(raw & mask) >> offset`, never `raw & (mask >> offset)`.
//! - **Preserve unknown bits** - Bits outside every named sub-field are
//!   reserved and round-trip unchanged.
//! - **Field-wise equality** - Reserved bits never affect comparison or
//!   hashing of a decoded word.
//! - **No domain knowledge** - Concrete appearance layouts live with the
//!   record definitions, not here.

mod field;
mod word;

pub use field::BitField;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_field_hand_computed() {
        // Damage: bits 3-4, mask 0x18.
        let damage = BitField::new(3, 2);
        assert_eq!(damage.mask(), 0x18);
        assert_eq!(damage.extract(0x0000_0010), 2);
        assert_eq!(damage.insert(0, 2), 0x0000_0010);
    }

    #[test]
    fn top_bit_field() {
        let field = BitField::new(31, 1);
        assert_eq!(field.mask(), 0x8000_0000);
        assert_eq!(field.extract(0x8000_0000), 1);
    }
}
