use crate::error::AtcError;
use std::str::FromStr;

/// Default boundary between dictionary and alignment routing, in nats.
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 4.5;
/// Default trim boundary, in elements.
pub const DEFAULT_ALIGNMENT: usize = 110;
/// Default dictionary index width, in bits.
pub const DEFAULT_INDEX_WIDTH: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionMethod {
    /// Passthrough; the buffer is returned untouched.
    Standard,
    /// Entropy-gated choice between dictionary coding and alignment trimming.
    Adaptive,
    /// Always trim to the alignment boundary, entropy is never computed.
    Aggressive,
}

#[derive(Debug, Clone)]
pub struct CompressorConfig {
    /// Buffers whose entropy falls below this value are dictionary-coded
    /// under `Adaptive`; everything at or above it is trimmed.
    pub entropy_threshold: f64,
    /// Trim boundary in elements. Must be positive.
    pub alignment: usize,
    /// Bits available to address distinct values in a dictionary block.
    pub dictionary_index_width: u8,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            entropy_threshold: DEFAULT_ENTROPY_THRESHOLD,
            alignment: DEFAULT_ALIGNMENT,
            dictionary_index_width: DEFAULT_INDEX_WIDTH,
        }
    }
}

impl CompressorConfig {
    pub fn with_entropy_threshold(mut self, threshold: f64) -> Self {
        self.entropy_threshold = threshold;
        self
    }

    pub fn with_alignment(mut self, alignment: usize) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_index_width(mut self, bits: u8) -> Self {
        self.dictionary_index_width = bits;
        self
    }
}

impl FromStr for CompressionMethod {
    type Err = AtcError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(CompressionMethod::Standard),
            "adaptive" => Ok(CompressionMethod::Adaptive),
            "aggressive" => Ok(CompressionMethod::Aggressive),
            _ => Err(AtcError::InvalidMethod(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = CompressorConfig::default();
        assert_eq!(config.entropy_threshold, 4.5);
        assert_eq!(config.alignment, 110);
        assert_eq!(config.dictionary_index_width, 8);
    }

    #[test]
    fn builder_overrides() {
        let config = CompressorConfig::default()
            .with_entropy_threshold(2.0)
            .with_alignment(64)
            .with_index_width(16);
        assert_eq!(config.entropy_threshold, 2.0);
        assert_eq!(config.alignment, 64);
        assert_eq!(config.dictionary_index_width, 16);
    }

    #[test]
    fn method_parsing() {
        assert_eq!("standard".parse::<CompressionMethod>().unwrap(), CompressionMethod::Standard);
        assert_eq!("Adaptive".parse::<CompressionMethod>().unwrap(), CompressionMethod::Adaptive);
        assert_eq!("AGGRESSIVE".parse::<CompressionMethod>().unwrap(), CompressionMethod::Aggressive);
    }

    #[test]
    fn unknown_method_is_rejected() {
        let err = "turbo".parse::<CompressionMethod>().unwrap_err();
        assert_eq!(err, AtcError::InvalidMethod("turbo".to_string()));
    }
}
