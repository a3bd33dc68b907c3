// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Collection of methods for statistical analysis of a sequence in [0, 1).

use std::cmp::Ordering;

use log::{debug, trace};
use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::{
    error::{LcgError, Result},
    utils,
};

fn require_non_empty(sequence: &[f64], what: &str) -> Result<()> {
    if sequence.is_empty() {
        return Err(LcgError::InvalidInput(format!(
            "{what} of an empty sequence is undefined"
        )));
    }
    Ok(())
}

/// Arithmetic mean. Errors on an empty sequence instead of yielding NaN.
pub fn mean(sequence: &[f64]) -> Result<f64> {
    require_non_empty(sequence, "mean")?;
    let sum: f64 = sequence.iter().sum();
    Ok(sum / sequence.len() as f64)
}

/// Population standard deviation (divides by N).
pub fn stddev(sequence: &[f64]) -> Result<f64> {
    require_non_empty(sequence, "standard deviation")?;
    let mu = mean(sequence)?;
    let variance = sequence
        .iter()
        .fold(0.0, |acc, v| acc + (v - mu) * (v - mu))
        / sequence.len() as f64;
    Ok(variance.sqrt())
}

/// Signs of consecutive differences with the no-change steps dropped.
fn step_signs(sequence: &[f64]) -> Vec<Ordering> {
    sequence
        .windows(2)
        .filter_map(|w| match w[1].partial_cmp(&w[0]) {
            Some(Ordering::Equal) | None => None,
            sign => sign,
        })
        .collect()
}

/// Counts runs up and down.
/// Returns (number of runs, number of non-zero steps they were built from).
pub fn runs_with_steps(sequence: &[f64]) -> (u64, usize) {
    let signs = step_signs(sequence);
    if signs.is_empty() {
        return (0, 0);
    }
    let changes = signs.windows(2).filter(|w| w[0] != w[1]).count() as u64;
    trace!("{} steps, {} direction changes", signs.len(), changes);
    (changes + 1, signs.len())
}

/// Number of maximal runs of equal direction in the up/down pattern.
/// A sequence without any strict increase or decrease has 0 runs.
pub fn runs_test(sequence: &[f64]) -> u64 {
    runs_with_steps(sequence).0
}

/// Two sided p value of the observed runs count under the hypothesis of
/// independent values. `steps` is the number of non-zero differences.
/// None for fewer than three effective values.
pub fn runs_p_value(runs: u64, steps: usize) -> Option<f64> {
    let n = steps as f64 + 1.0;
    if n < 3.0 {
        return None;
    }
    let expected = (2.0 * n - 1.0) / 3.0;
    let variance = (16.0 * n - 29.0) / 90.0;
    let z = (runs as f64 - expected) / variance.sqrt();
    debug!("runs z score {z:.4} (expected {expected:.2})");
    Some(statrs::function::erf::erfc(z.abs() * utils::INV_ROOT2))
}

/// Chi squared statistic of `observed` against `expected`.
pub fn chi_square(observed: &[usize], expected: &[f64]) -> Result<f64> {
    if observed.len() != expected.len() {
        return Err(LcgError::InvalidInput(format!(
            "{} observed bins but {} expected values",
            observed.len(),
            expected.len()
        )));
    }
    let mut chi_squared: f64 = 0.0;
    for (i, (&o, &e)) in observed.iter().zip(expected).enumerate() {
        if !(e > 0.0 && e.is_finite()) {
            return Err(LcgError::InvalidInput(format!(
                "expected count {e} for bin {i} must be positive"
            )));
        }
        chi_squared += (o as f64 - e).powi(2) / e;
    }
    Ok(chi_squared)
}

/// Upper tail p value for given degrees of freedom and chi squared value.
/// None when there are no degrees of freedom.
pub fn chi_squared_p_value(df: usize, chi_squared: f64) -> Option<f64> {
    if df == 0 {
        return None;
    }
    let dist = ChiSquared::new(df as f64).ok()?;
    Some(1.0 - dist.cdf(chi_squared))
}
