//! # ATC (Adaptive Tensor Compression) Engine
//!
//! A per-block tensor compression core that decides, buffer by buffer,
//! between a lossless dictionary-coding path and a lossy alignment-trimming
//! path, and executes the chosen transform.
//!
//! ## Features
//!
//! - **Adaptive Selection**: routes each buffer by its Shannon entropy;
//!   low-entropy buffers are dictionary-coded, high-entropy buffers are
//!   trimmed to an alignment boundary
//! - **Explicit Lossiness**: results are a tagged [`EncodedBlock`]; the lossy
//!   `Aligned` variant cannot be mistaken for a round-trippable one
//! - **Parallel Trim Kernel**: the alignment copy runs as a data-parallel
//!   map over disjoint output slices
//! - **Validated Index Width**: dictionary indices never silently wrap; a
//!   too-narrow index width fails with a tagged error
//!
//! ## Quick Start
//!
//! ```rust
//! use atc::{compress, CompressionMethod, CompressorConfig, EncodedBlock};
//!
//! let buffer: Vec<u8> = vec![1, 1, 1, 1, 2, 2, 3];
//! let config = CompressorConfig::default().with_alignment(4);
//!
//! // Entropy ~1.0 is under the default 4.5 threshold, so the adaptive
//! // method dictionary-codes this buffer.
//! match compress(&buffer, CompressionMethod::Adaptive, &config).unwrap() {
//!     EncodedBlock::Dictionary { uniques, indices } => {
//!         assert_eq!(uniques, vec![1, 2, 3]);
//!         assert_eq!(indices, vec![0, 0, 0, 0, 1, 1, 2]);
//!     }
//!     other => panic!("expected dictionary coding, got {}", other.variant_name()),
//! }
//! ```
//!
//! ## The Lossy Path
//!
//! ```rust
//! use atc::{compress, CompressionMethod, CompressorConfig, EncodedBlock};
//!
//! let buffer: Vec<u32> = (0..300).collect();
//! let config = CompressorConfig::default().with_alignment(128);
//!
//! let block = compress(&buffer, CompressionMethod::Aggressive, &config).unwrap();
//! assert!(!block.is_lossless());
//! assert_eq!(block.reconstruct(), None); // dropped elements are gone
//! if let EncodedBlock::Aligned { data, dropped_count, .. } = block {
//!     assert_eq!(data.len(), 256);
//!     assert_eq!(dropped_count, 44);
//! }
//! ```

pub mod block;
pub mod cli;
pub mod compressor;
pub mod config;
pub mod error;
pub mod transforms;

// Re-export commonly used types for convenience
pub use block::{BlockStats, EncodedBlock};
pub use compressor::AdaptiveCompressor;
pub use config::{CompressionMethod, CompressorConfig};
pub use error::{AtcError, Result};

use std::hash::Hash;

/// Fixed-width element types a buffer may contain.
///
/// `Ord` pins the deterministic ascending dictionary ordering, `Hash`/`Eq`
/// drive frequency counting, and `Default` is the fill value for freshly
/// allocated output buffers. Satisfied by the fixed-width integer
/// primitives; floats are excluded because they carry no total order.
pub trait Element: Copy + Ord + Eq + Hash + Default + Send + Sync {}

impl<T> Element for T where T: Copy + Ord + Eq + Hash + Default + Send + Sync {}

/// Compress a single buffer with the given method and configuration.
///
/// This is the crate's primary entry point. The buffer is never mutated;
/// the returned [`EncodedBlock`] is owned by the caller and its tag reveals
/// which path was taken.
pub fn compress<T: Element>(
    buffer: &[T],
    method: CompressionMethod,
    config: &CompressorConfig,
) -> Result<EncodedBlock<T>> {
    AdaptiveCompressor::new(config.clone()).compress(buffer, method)
}

/// ATC library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
