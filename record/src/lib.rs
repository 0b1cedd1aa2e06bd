//! Record codec trait, list helpers and open enumerations for the
//! dispdu codec.
//!
//! Every structural unit of the wire format (PDU bodies, nested
//! sub-records, bitfield holders) implements [`WireRecord`]: an exact
//! size computation, an infallible append-only encode, and a fallible
//! decode that discards partial state on error. On top of that this
//! crate provides:
//!
//! - variable-length list helpers covering both count conventions
//!   ([`decode_counted`] for explicit element counts,
//!   [`decode_within_budget`] / [`decode_sized_list`] for declared byte
//!   budgets),
//! - [`wire_enum!`], integer newtypes for the standard's open
//!   enumerations (unknown values are preserved, never rejected),
//! - the [`FieldVisitor`] reflection interface used by external
//!   formatters.
//!
//! # Design Principles
//!
//! - **Layout is declaration order** - No field is optional; absence is
//!   the zero value.
//! - **Derived fields are recomputed** - Counts and budgets are written
//!   from the live list lengths, never from cached values.
//! - **No validation on decode** - Out-of-range values are data, not
//!   errors; only structural failures abort.

mod codec;
mod enums;
mod error;
mod list;
mod visit;

pub use codec::{decode_from_slice, encode_to_vec, WireRecord};
pub use error::{DecodeError, DecodeResult};
pub use list::{
    decode_counted, decode_sized_list, decode_within_budget, encode_list, list_wire_size,
};
pub use visit::{FieldVisitor, Scalar, VisitFields};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_api_exports() {
        let _: DecodeResult<()> = Ok(());
        let _ = Scalar::U8(0);
    }
}
