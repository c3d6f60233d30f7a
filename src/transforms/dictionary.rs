//! Dictionary coding for low-cardinality buffers.
//!
//! Replaces each element with an index into the ascending-sorted table of
//! distinct values. Lossless as long as every distinct value is addressable
//! at the configured index width; the encoder fails loudly instead of
//! letting a too-narrow index wrap.

use crate::block::EncodedBlock;
use crate::error::{AtcError, Result};
use crate::Element;
use std::collections::HashMap;

/// Encode a buffer as a dictionary block.
///
/// `uniques` is sorted ascending, so the table is deterministic regardless
/// of input order. Fails with [`AtcError::DictionaryOverflow`] when the
/// distinct-value count exceeds `2^index_width_bits`.
pub fn encode<T: Element>(buffer: &[T], index_width_bits: u8) -> Result<EncodedBlock<T>> {
    let mut uniques: Vec<T> = buffer.to_vec();
    uniques.sort_unstable();
    uniques.dedup();

    let capacity = addressable_values(index_width_bits);
    if uniques.len() > capacity {
        return Err(AtcError::DictionaryOverflow {
            distinct: uniques.len(),
            capacity,
            width: index_width_bits,
        });
    }

    // One value->index map built up front keeps the per-element lookup O(1).
    let positions: HashMap<T, u32> = uniques
        .iter()
        .enumerate()
        .map(|(i, &value)| (value, i as u32))
        .collect();

    let indices = buffer.iter().map(|value| positions[value]).collect();

    Ok(EncodedBlock::Dictionary { uniques, indices })
}

/// Number of distinct values addressable at the given index width.
///
/// Widths at or beyond the pointer width saturate; indices are stored as
/// `u32`, so in practice a 32-bit width already covers any realistic table.
fn addressable_values(width_bits: u8) -> usize {
    match 1usize.checked_shl(u32::from(width_bits)) {
        Some(capacity) => capacity,
        None => usize::MAX,
    }
}
