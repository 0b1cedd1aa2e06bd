//! PDU envelope framing and dispatch for the dispdu codec.
//!
//! Every PDU is a fixed 12-byte header followed by a kind-specific body.
//! This crate provides the header record, two-phase envelope encoding
//! (body size computed first, header length recomputed from it, then
//! header and body written in order), the kind-to-body [`PduRegistry`],
//! and [`PduStream`] for walking buffers of concatenated PDUs with
//! caller-driven resynchronization.
//!
//! # Design Principles
//!
//! - **Length is derived** - The header's length field is recomputed
//!   from the body on every encode; stored values are never trusted.
//! - **Decode surfaces, never repairs** - The stated length is returned
//!   exactly as read next to the bytes actually consumed.
//! - **Dispatch is data** - New PDU kinds are registered by callers;
//!   unknown kinds fail with the header so the caller can skip and
//!   continue, explicitly.

mod envelope;
mod error;
mod header;
mod pdu_stream;
mod registry;

pub use envelope::{encode_pdu, Pdu, PduBody};
pub use error::{DecodeError, EncodeError, WireResult};
pub use header::{PduHeader, PduKind, ProtocolFamily, ProtocolVersion, HEADER_SIZE};
pub use pdu_stream::PduStream;
pub use registry::{DecodedPdu, PduRegistry};
