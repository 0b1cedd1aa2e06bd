//! Byte-level writer for encoding big-endian wire data.

/// A byte-level writer for encoding big-endian wire data.
///
/// Writes are accumulated in an append-only internal buffer and never
/// fail. Call [`finish`](Self::finish) to get the final byte buffer.
#[derive(Debug, Default)]
pub struct BytesWriter {
    bytes: Vec<u8>,
}

macro_rules! write_scalar {
    ($(#[$attr:meta])* $name:ident, $ty:ty) => {
        $(#[$attr])*
        pub fn $name(&mut self, value: $ty) {
            self.bytes.extend_from_slice(&value.to_be_bytes());
        }
    };
}

impl BytesWriter {
    /// Creates a new empty `BytesWriter`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `BytesWriter` with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bytes),
        }
    }

    /// Returns the number of bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if nothing has been written yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    write_scalar!(
        /// Writes a big-endian `u8`.
        write_u8,
        u8
    );
    write_scalar!(
        /// Writes a big-endian `u16`.
        write_u16,
        u16
    );
    write_scalar!(
        /// Writes a big-endian `u32`.
        write_u32,
        u32
    );
    write_scalar!(
        /// Writes a big-endian `u64`.
        write_u64,
        u64
    );
    write_scalar!(
        /// Writes a big-endian `i8`.
        write_i8,
        i8
    );
    write_scalar!(
        /// Writes a big-endian `i16`.
        write_i16,
        i16
    );
    write_scalar!(
        /// Writes a big-endian `i32`.
        write_i32,
        i32
    );
    write_scalar!(
        /// Writes a big-endian `i64`.
        write_i64,
        i64
    );
    write_scalar!(
        /// Writes a big-endian IEEE-754 `f32`.
        write_f32,
        f32
    );
    write_scalar!(
        /// Writes a big-endian IEEE-754 `f64`.
        write_f64,
        f64
    );

    /// Appends raw bytes verbatim.
    pub fn write_bytes(&mut self, value: &[u8]) {
        self.bytes.extend_from_slice(value);
    }

    /// Finishes writing and returns the byte buffer.
    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.bytes
    }

    /// Finishes writing and appends to the provided buffer.
    pub fn finish_into(mut self, buf: &mut Vec<u8>) {
        buf.append(&mut self.bytes);
    }
}
