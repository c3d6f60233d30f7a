//! Alignment trimming: truncate a buffer to the largest multiple of the
//! alignment boundary.
//!
//! This path is lossy. The trailing remainder is dropped outright and the
//! result is tagged [`EncodedBlock::Aligned`] so callers can tell.

use crate::block::EncodedBlock;
use crate::error::{AtcError, Result};
use crate::Element;
use rayon::prelude::*;

/// Elements per parallel work unit in the copy kernel.
const PAR_CHUNK: usize = 4096;

/// Trim `buffer` down to the largest multiple of `alignment` elements.
///
/// The copy is a pure element-wise map: each output position depends only on
/// the same input position, so it is split across rayon workers as disjoint
/// output chunks zipped with read-only input chunks. `dropped_count` reports
/// exactly how many trailing elements were discarded.
///
/// A buffer shorter than one alignment unit passes through unchanged with
/// `dropped_count == 0`; trimming it would discard everything.
pub fn trim<T: Element>(buffer: &[T], alignment: usize) -> Result<EncodedBlock<T>> {
    if alignment == 0 {
        return Err(AtcError::InvalidAlignment);
    }

    let optimal_size = (buffer.len() / alignment) * alignment;
    if optimal_size == 0 {
        return Ok(EncodedBlock::Aligned {
            data: buffer.to_vec(),
            alignment,
            dropped_count: 0,
        });
    }

    let mut data = vec![T::default(); optimal_size];
    data.par_chunks_mut(PAR_CHUNK)
        .zip(buffer[..optimal_size].par_chunks(PAR_CHUNK))
        .for_each(|(out, src)| out.copy_from_slice(src));

    Ok(EncodedBlock::Aligned {
        data,
        alignment,
        dropped_count: buffer.len() - optimal_size,
    })
}
