//! Strategy selection and dispatch for a single buffer.

use crate::block::EncodedBlock;
use crate::config::{CompressionMethod, CompressorConfig};
use crate::error::Result;
use crate::transforms::{dictionary, entropy, trim};
use crate::Element;

/// Per-buffer compressor: picks a path for the configured method and runs it.
///
/// The compressor holds no state beyond its configuration. It never mutates
/// the caller's buffer and keeps no reference to input or output once
/// `compress` returns.
#[derive(Debug, Clone, Default)]
pub struct AdaptiveCompressor {
    config: CompressorConfig,
}

impl AdaptiveCompressor {
    pub fn new(config: CompressorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    /// Compress one buffer with the given method.
    ///
    /// - `Standard` is the identity transform and has no error paths.
    /// - `Aggressive` always trims; entropy is never computed, so the caller
    ///   does not pay for an estimate it has already overridden.
    /// - `Adaptive` routes on entropy: below the threshold the buffer is
    ///   assumed low-cardinality and dictionary-coded, at or above it the
    ///   only safe win is dropping structural padding, so it is trimmed.
    ///   An [`crate::AtcError::EmptyInput`] from the estimator propagates
    ///   instead of defaulting to either path.
    pub fn compress<T: Element>(
        &self,
        buffer: &[T],
        method: CompressionMethod,
    ) -> Result<EncodedBlock<T>> {
        match method {
            CompressionMethod::Standard => Ok(EncodedBlock::Raw {
                data: buffer.to_vec(),
            }),
            CompressionMethod::Aggressive => trim::trim(buffer, self.config.alignment),
            CompressionMethod::Adaptive => {
                let entropy = entropy::estimate(buffer)?;
                if entropy < self.config.entropy_threshold {
                    dictionary::encode(buffer, self.config.dictionary_index_width)
                } else {
                    trim::trim(buffer, self.config.alignment)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AtcError;

    #[test]
    fn standard_is_identity() {
        let buffer: Vec<u8> = (0..77).collect();
        let compressor = AdaptiveCompressor::default();
        let block = compressor
            .compress(&buffer, CompressionMethod::Standard)
            .unwrap();
        assert_eq!(block, EncodedBlock::Raw { data: buffer });
    }

    #[test]
    fn standard_accepts_empty_buffers() {
        let buffer: Vec<u8> = Vec::new();
        let compressor = AdaptiveCompressor::default();
        let block = compressor
            .compress(&buffer, CompressionMethod::Standard)
            .unwrap();
        assert_eq!(block, EncodedBlock::Raw { data: Vec::new() });
    }

    #[test]
    fn aggressive_always_trims() {
        // Constant buffer: entropy 0 would route Adaptive to the dictionary,
        // but Aggressive must trim regardless.
        let buffer = vec![5u8; 225];
        let config = CompressorConfig::default().with_alignment(100);
        let block = AdaptiveCompressor::new(config)
            .compress(&buffer, CompressionMethod::Aggressive)
            .unwrap();
        match block {
            EncodedBlock::Aligned {
                data,
                dropped_count,
                ..
            } => {
                assert_eq!(data.len(), 200);
                assert_eq!(dropped_count, 25);
            }
            other => panic!("expected aligned block, got {}", other.variant_name()),
        }
    }

    #[test]
    fn aggressive_skips_entropy_on_empty_input() {
        // The estimator would reject an empty buffer; Aggressive never calls it.
        let buffer: Vec<u8> = Vec::new();
        let compressor = AdaptiveCompressor::default();
        let block = compressor
            .compress(&buffer, CompressionMethod::Aggressive)
            .unwrap();
        assert_eq!(block.output_len(), 0);
        assert_eq!(block.dropped_count(), 0);
    }

    #[test]
    fn adaptive_rejects_empty_input() {
        let buffer: Vec<u8> = Vec::new();
        let compressor = AdaptiveCompressor::default();
        let err = compressor
            .compress(&buffer, CompressionMethod::Adaptive)
            .unwrap_err();
        assert_eq!(err, AtcError::EmptyInput);
    }

    #[test]
    fn adaptive_routes_low_entropy_to_dictionary() {
        // 2 distinct values over 1000 elements: entropy = ln(2) ~ 0.69
        let buffer: Vec<u8> = (0..1000).map(|i| (i % 2) as u8).collect();
        let compressor = AdaptiveCompressor::default();
        let block = compressor
            .compress(&buffer, CompressionMethod::Adaptive)
            .unwrap();
        assert_eq!(block.variant_name(), "dictionary");
        assert_eq!(block.reconstruct().unwrap(), buffer);
    }

    #[test]
    fn adaptive_routes_high_entropy_to_trim() {
        // 256 equally frequent values: entropy = ln(256) ~ 5.55 >= 4.5
        let buffer: Vec<u8> = (0..1000).map(|i| (i % 256) as u8).collect();
        let compressor = AdaptiveCompressor::default();
        let block = compressor
            .compress(&buffer, CompressionMethod::Adaptive)
            .unwrap();
        assert_eq!(block.variant_name(), "aligned");
        assert!(!block.is_lossless());
    }

    #[test]
    fn threshold_is_configurable() {
        // ln(4) ~ 1.39: below the default threshold, above a threshold of 1.0
        let buffer: Vec<u8> = (0..400).map(|i| (i % 4) as u8).collect();

        let default_block = AdaptiveCompressor::default()
            .compress(&buffer, CompressionMethod::Adaptive)
            .unwrap();
        assert_eq!(default_block.variant_name(), "dictionary");

        let strict = CompressorConfig::default().with_entropy_threshold(1.0);
        let strict_block = AdaptiveCompressor::new(strict)
            .compress(&buffer, CompressionMethod::Adaptive)
            .unwrap();
        assert_eq!(strict_block.variant_name(), "aligned");
    }
}
