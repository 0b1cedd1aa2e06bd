//! Read-only recursive field enumeration.
//!
//! External formatters (text dumps, structured output) render records by
//! walking their fields through [`FieldVisitor`] callbacks; the codec
//! itself never depends on any particular output format.

/// A single scalar field value surfaced during reflection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

macro_rules! scalar_from {
    ($($variant:ident, $ty:ty;)*) => {
        $(
            impl From<$ty> for Scalar {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

scalar_from! {
    U8, u8;
    U16, u16;
    U32, u32;
    U64, u64;
    I8, i8;
    I16, i16;
    I32, i32;
    I64, i64;
    F32, f32;
    F64, f64;
}

/// Receives an in-order enumeration of a record's fields.
///
/// Calls arrive in wire order. Nested records and lists are bracketed by
/// `begin_*`/`end_*` pairs; everything else is a scalar or a raw byte
/// run.
pub trait FieldVisitor {
    /// A fixed-width scalar field.
    fn scalar(&mut self, name: &str, value: Scalar);

    /// A raw byte run (marking characters, datum payloads).
    fn bytes(&mut self, name: &str, value: &[u8]);

    /// Start of a nested record field.
    fn begin_record(&mut self, name: &str);

    /// End of the most recently begun record.
    fn end_record(&mut self);

    /// Start of a variable-length list field with `len` elements.
    fn begin_list(&mut self, name: &str, len: usize);

    /// End of the most recently begun list.
    fn end_list(&mut self);
}

/// Exposes a record's fields to a [`FieldVisitor`].
pub trait VisitFields {
    /// Walks every field in wire order.
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor);
}
