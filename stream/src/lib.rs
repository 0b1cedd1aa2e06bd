//! Big-endian byte stream primitives for the dispdu codec.
//!
//! This crate provides [`BytesWriter`] and [`BytesReader`] for byte-level
//! encoding and decoding in network byte order, the order the PDU wire
//! format fixes for every field.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Bounded operations** - All reads are bounds-checked.
//! - **No domain knowledge** - This crate knows nothing about PDUs,
//!   records, or enumerations.
//! - **Forward only** - The cursor position only advances; there is no
//!   seek or rewind, matching single-pass marshal/unmarshal.
//!
//! # Example
//!
//! ```
//! use stream::{BytesWriter, BytesReader};
//!
//! let mut writer = BytesWriter::new();
//! writer.write_u16(0x1234);
//! writer.write_f32(1.5);
//!
//! let bytes = writer.finish();
//!
//! let mut reader = BytesReader::new(&bytes);
//! assert_eq!(reader.read_u16().unwrap(), 0x1234);
//! assert_eq!(reader.read_f32().unwrap(), 1.5);
//! ```

mod error;
mod reader;
mod writer;

pub use error::{StreamError, StreamResult};
pub use reader::BytesReader;
pub use writer::BytesWriter;
