//! Shannon entropy over the empirical distribution of element values.
//!
//! The statistic depends only on the multiset of values, never on their
//! order, and uses the natural log: a buffer of `k` equally frequent values
//! scores `ln(k)`, a constant buffer scores 0.

use crate::error::{AtcError, Result};
use crate::Element;
use std::collections::BTreeMap;

/// Estimate the entropy of a buffer, in nats.
///
/// An empty buffer has no value distribution to speak of, so it is rejected
/// with [`AtcError::EmptyInput`] up front rather than surfacing as a NaN out
/// of the frequency fold.
///
/// Counting goes through a `BTreeMap` so the summation order is fixed by the
/// value ordering, keeping the result bit-identical across runs and element
/// orderings.
pub fn estimate<T: Element>(buffer: &[T]) -> Result<f64> {
    if buffer.is_empty() {
        return Err(AtcError::EmptyInput);
    }

    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for value in buffer {
        *counts.entry(*value).or_insert(0) += 1;
    }

    // Every count is >= 1, so p > 0 and ln(p) is finite.
    let total = buffer.len() as f64;
    let entropy = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.ln()
        })
        .sum();

    Ok(entropy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_is_rejected() {
        let buffer: Vec<u8> = Vec::new();
        assert_eq!(estimate(&buffer), Err(AtcError::EmptyInput));
    }

    #[test]
    fn constant_buffer_has_zero_entropy() {
        let buffer = vec![42u8; 1000];
        assert_eq!(estimate(&buffer).unwrap(), 0.0);
    }

    #[test]
    fn equal_frequencies_give_ln_k() {
        // 4 values, 250 occurrences each
        let buffer: Vec<u8> = (0..1000).map(|i| (i % 4) as u8).collect();
        let entropy = estimate(&buffer).unwrap();
        assert!((entropy - 4.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn uniform_bytes_score_ln_256() {
        let buffer: Vec<u8> = (0..1024).map(|i| (i % 256) as u8).collect();
        let entropy = estimate(&buffer).unwrap();
        assert!((entropy - 256.0f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn order_invariance() {
        let sorted: Vec<u16> = (0..500).map(|i| (i % 7) as u16).collect();
        let mut shuffled = sorted.clone();
        shuffled.reverse();
        shuffled.rotate_left(123);
        assert_eq!(estimate(&sorted).unwrap(), estimate(&shuffled).unwrap());
    }

    #[test]
    fn skewed_distribution_is_below_uniform() {
        let mut buffer = vec![0u8; 900];
        buffer.extend(vec![1u8; 100]);
        let skewed = estimate(&buffer).unwrap();
        let uniform: Vec<u8> = (0..1000).map(|i| (i % 2) as u8).collect();
        assert!(skewed < estimate(&uniform).unwrap());
        assert!(skewed > 0.0);
    }
}
