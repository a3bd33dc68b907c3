// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Plain text rendering of a histogram and of the first values of a sequence.

use crate::histogram::Histogram;

const BAR_CHAR: char = '#';

/// One line per bin: label, bar scaled to the fullest bin, count.
pub fn histogram_bars(histogram: &Histogram, width: usize) -> String {
    let max_count = histogram.counts.iter().copied().max().unwrap_or(0);
    let count_width = max_count.to_string().len();
    histogram
        .bin_labels
        .iter()
        .zip(&histogram.counts)
        .map(|(label, &count)| {
            let bar_len = if max_count == 0 {
                0
            } else {
                count * width / max_count
            };
            format!(
                "{label} |{:<width$}| {count:>count_width$}",
                BAR_CHAR.to_string().repeat(bar_len),
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

/// First `k` values to six decimals, comma separated.
pub fn sample_preview(sequence: &[f64], k: usize) -> String {
    sequence
        .iter()
        .take(k)
        .map(|v| format!("{:.6}", v))
        .collect::<Vec<String>>()
        .join(", ")
}
