//! Encoded output of a single compression call.
//!
//! The variant tag is part of the contract: `Aligned` is the only lossy
//! variant, and callers that need a round trip must check for it instead of
//! treating every block as recoverable.

use crate::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodedBlock<T> {
    /// Lossless dictionary coding: `uniques` holds the distinct values in
    /// ascending order and `indices[i]` is the position of the i-th input
    /// element in `uniques`.
    Dictionary { uniques: Vec<T>, indices: Vec<u32> },
    /// Lossy alignment trim: `data` is a prefix of the input whose length is
    /// the largest multiple of `alignment`, except for sub-alignment inputs
    /// which pass through whole. The `dropped_count` trailing elements are
    /// irrecoverable.
    Aligned {
        data: Vec<T>,
        alignment: usize,
        dropped_count: usize,
    },
    /// Passthrough, identical to the input.
    Raw { data: Vec<T> },
}

impl<T: Element> EncodedBlock<T> {
    pub fn variant_name(&self) -> &'static str {
        match self {
            EncodedBlock::Dictionary { .. } => "dictionary",
            EncodedBlock::Aligned { .. } => "aligned",
            EncodedBlock::Raw { .. } => "raw",
        }
    }

    /// False only for `Aligned`, whose trailing elements are gone.
    pub fn is_lossless(&self) -> bool {
        !matches!(self, EncodedBlock::Aligned { .. })
    }

    /// Elements represented by this block (indices for dictionary blocks).
    pub fn output_len(&self) -> usize {
        match self {
            EncodedBlock::Dictionary { indices, .. } => indices.len(),
            EncodedBlock::Aligned { data, .. } => data.len(),
            EncodedBlock::Raw { data } => data.len(),
        }
    }

    pub fn dropped_count(&self) -> usize {
        match self {
            EncodedBlock::Aligned { dropped_count, .. } => *dropped_count,
            _ => 0,
        }
    }

    /// Rebuild the original buffer for the lossless variants.
    ///
    /// Returns `None` for `Aligned`: the dropped elements cannot be
    /// recovered, and refusing here keeps callers from assuming otherwise.
    pub fn reconstruct(&self) -> Option<Vec<T>> {
        match self {
            EncodedBlock::Dictionary { uniques, indices } => {
                Some(indices.iter().map(|&i| uniques[i as usize]).collect())
            }
            EncodedBlock::Raw { data } => Some(data.clone()),
            EncodedBlock::Aligned { .. } => None,
        }
    }
}

/// Summary of one encoded block, for reporting layers.
#[derive(Debug, Clone)]
pub struct BlockStats {
    pub variant: &'static str,
    pub input_len: usize,
    pub output_len: usize,
    pub dropped_count: usize,
    /// Distinct-value count, present only for dictionary blocks.
    pub distinct_count: Option<usize>,
    pub lossless: bool,
}

impl BlockStats {
    pub fn from_block<T: Element>(block: &EncodedBlock<T>, input_len: usize) -> Self {
        let distinct_count = match block {
            EncodedBlock::Dictionary { uniques, .. } => Some(uniques.len()),
            _ => None,
        };
        Self {
            variant: block.variant_name(),
            input_len,
            output_len: block.output_len(),
            dropped_count: block.dropped_count(),
            distinct_count,
            lossless: block.is_lossless(),
        }
    }

    /// Fraction of input elements still represented in the output.
    pub fn retained_ratio(&self) -> f64 {
        if self.input_len == 0 {
            return 1.0;
        }
        (self.input_len - self.dropped_count) as f64 / self.input_len as f64
    }

    pub fn dropped_percentage(&self) -> f64 {
        (1.0 - self.retained_ratio()) * 100.0
    }
}
