//! Byte-level reader with bounded operations.

use crate::error::{StreamError, StreamResult};

/// A byte-level reader for decoding big-endian wire data.
///
/// All read operations are bounds-checked and return errors on failure.
/// The reader never panics on malformed input, and its position only
/// moves forward.
#[derive(Debug)]
pub struct BytesReader<'a> {
    data: &'a [u8],
    pos: usize,
}

macro_rules! read_scalar {
    ($(#[$attr:meta])* $name:ident, $ty:ty) => {
        $(#[$attr])*
        pub fn $name(&mut self) -> StreamResult<$ty> {
            let bytes = self.read_array::<{ std::mem::size_of::<$ty>() }>()?;
            Ok(<$ty>::from_be_bytes(bytes))
        }
    };
}

impl<'a> BytesReader<'a> {
    /// Creates a new `BytesReader` over a byte slice.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the number of bytes consumed so far.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the number of bytes remaining to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Returns `true` if there are no more bytes to read.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    read_scalar!(
        /// Reads a big-endian `u8`.
        read_u8,
        u8
    );
    read_scalar!(
        /// Reads a big-endian `u16`.
        read_u16,
        u16
    );
    read_scalar!(
        /// Reads a big-endian `u32`.
        read_u32,
        u32
    );
    read_scalar!(
        /// Reads a big-endian `u64`.
        read_u64,
        u64
    );
    read_scalar!(
        /// Reads a big-endian `i8`.
        read_i8,
        i8
    );
    read_scalar!(
        /// Reads a big-endian `i16`.
        read_i16,
        i16
    );
    read_scalar!(
        /// Reads a big-endian `i32`.
        read_i32,
        i32
    );
    read_scalar!(
        /// Reads a big-endian `i64`.
        read_i64,
        i64
    );
    read_scalar!(
        /// Reads a big-endian IEEE-754 `f32`.
        read_f32,
        f32
    );
    read_scalar!(
        /// Reads a big-endian IEEE-754 `f64`.
        read_f64,
        f64
    );

    /// Reads `len` raw bytes as a borrowed slice.
    pub fn read_bytes(&mut self, len: usize) -> StreamResult<&'a [u8]> {
        self.ensure(len)?;
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Advances past `len` bytes without interpreting them.
    pub fn skip(&mut self, len: usize) -> StreamResult<()> {
        self.ensure(len)?;
        self.pos += len;
        Ok(())
    }

    /// Splits off a bounded sub-reader over the next `len` bytes.
    ///
    /// The parent cursor advances past the full `len` bytes immediately;
    /// reads on the sub-reader fail once its budget is exhausted even if
    /// the parent buffer had more data. Used for records whose length is
    /// declared by an enclosing field.
    pub fn take(&mut self, len: usize) -> StreamResult<BytesReader<'a>> {
        let slice = self.read_bytes(len)?;
        Ok(BytesReader::new(slice))
    }

    fn ensure(&self, len: usize) -> StreamResult<()> {
        let available = self.remaining();
        if len > available {
            return Err(StreamError::UnexpectedEnd {
                requested: len,
                available,
            });
        }
        Ok(())
    }

    fn read_array<const N: usize>(&mut self) -> StreamResult<[u8; N]> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }
}
