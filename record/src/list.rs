//! Variable-length list helpers.
//!
//! Two count conventions coexist on the wire and both are supported:
//!
//! - *self-describing*: a count field holds the element count; the count
//!   is always written from `list.len()` at encode time, never from a
//!   cached value.
//! - *length-describing*: a length field holds a byte budget the list or
//!   record must consume exactly.

use stream::{BytesReader, BytesWriter};

use crate::codec::WireRecord;
use crate::error::{DecodeError, DecodeResult};

/// Encodes list elements back-to-back.
///
/// The count field is written separately at its own wire position by the
/// enclosing record, always from `items.len()`.
pub fn encode_list<T: WireRecord>(items: &[T], w: &mut BytesWriter) {
    for item in items {
        item.encode(w);
    }
}

/// Sum of the current wire sizes of all elements.
#[must_use]
pub fn list_wire_size<T: WireRecord>(items: &[T]) -> usize {
    items.iter().map(WireRecord::wire_size).sum()
}

/// Decodes exactly `count` elements, no more.
///
/// A buffer too short for the declared count fails with
/// [`DecodeError::UnexpectedEnd`]; there is no partial result.
pub fn decode_counted<T: WireRecord>(
    r: &mut BytesReader<'_>,
    count: usize,
) -> DecodeResult<Vec<T>> {
    let mut items = Vec::with_capacity(count.min(MAX_PREALLOCATED));
    for _ in 0..count {
        items.push(T::decode(r)?);
    }
    Ok(items)
}

/// Decodes one record that must consume exactly `budget` bytes.
///
/// The record reads from a bounded sub-cursor, so it can neither read
/// past its declared budget nor leave part of it unconsumed without
/// failing.
pub fn decode_within_budget<T: WireRecord>(
    r: &mut BytesReader<'_>,
    budget: usize,
) -> DecodeResult<T> {
    let mut sub = r.take(budget)?;
    let record = T::decode(&mut sub)?;
    if !sub.is_empty() {
        return Err(DecodeError::BudgetMismatch {
            budget,
            consumed: budget - sub.remaining(),
        });
    }
    Ok(record)
}

/// Decodes homogeneous elements until `budget` bytes are exactly
/// exhausted.
///
/// An element overrunning the budget fails with
/// [`DecodeError::UnexpectedEnd`]; an element consuming nothing fails
/// with [`DecodeError::BudgetMismatch`] rather than looping forever.
pub fn decode_sized_list<T: WireRecord>(
    r: &mut BytesReader<'_>,
    budget: usize,
) -> DecodeResult<Vec<T>> {
    let mut sub = r.take(budget)?;
    let mut items = Vec::new();
    while !sub.is_empty() {
        let before = sub.remaining();
        items.push(T::decode(&mut sub)?);
        if sub.remaining() == before {
            return Err(DecodeError::BudgetMismatch {
                budget,
                consumed: budget - before,
            });
        }
    }
    Ok(items)
}

// Guards Vec::with_capacity against hostile counts; the reads themselves
// are already bounds-checked.
const MAX_PREALLOCATED: usize = 1024;
