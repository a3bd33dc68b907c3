// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Equal width binning of values in [0, 1).

use log::debug;

use crate::error::{LcgError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub bin_count: usize,
    pub counts: Vec<usize>,
    /// `"lo-hi"` for each half open bin `[lo, hi)`, three decimals.
    pub bin_labels: Vec<String>,
}

impl Histogram {
    /// Sum of all bin counts, equals the length of the binned sequence.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Uniform expectation `total / bin_count` for every bin.
    pub fn uniform_expected(&self) -> Vec<f64> {
        let expected = self.total() as f64 / self.bin_count as f64;
        vec![expected; self.bin_count]
    }
}

/// Map a value to its bin, clamping anything at or above 1.0 to the last bin.
fn bin_index(value: f64, bin_count: usize) -> usize {
    let idx = (value * bin_count as f64).floor();
    if idx <= 0.0 {
        0
    } else {
        (idx as usize).min(bin_count - 1)
    }
}

fn bin_labels(bin_count: usize) -> Vec<String> {
    let edges: Vec<f64> = (0..=bin_count)
        .map(|i| i as f64 / bin_count as f64)
        .collect();
    edges
        .windows(2)
        .map(|w| format!("{:.3}-{:.3}", w[0], w[1]))
        .collect()
}

/// Partition `sequence` into `bin_count` equal width bins over [0, 1).
pub fn bin(sequence: &[f64], bin_count: usize) -> Result<Histogram> {
    if bin_count == 0 {
        return Err(LcgError::InvalidParameter(
            "bin count must be greater than zero".to_owned(),
        ));
    }
    let mut counts = vec![0usize; bin_count];
    for &v in sequence {
        counts[bin_index(v, bin_count)] += 1;
    }
    debug!("binned {} values into {} bins", sequence.len(), bin_count);
    Ok(Histogram {
        bin_count,
        counts,
        bin_labels: bin_labels(bin_count),
    })
}
