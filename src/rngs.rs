// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Linear congruential generator and its well known parameter sets.
//!
//! The recurrence is `x = (a * x + c) mod m`. All parameters are `u64`,
//! the multiply-add-mod step is carried out in `u128` so that it can never
//! overflow: `(2^64 - 1)^2 + (2^64 - 1) < 2^128`. Only the final ratio
//! `x / m` is converted to `f64`.

use log::{debug, trace, warn};

use crate::error::{LcgError, Result};

/// Parameters of a single generator run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GeneratorParameters {
    pub seed: u64,
    /// `a`
    pub multiplier: u64,
    /// `c`
    pub increment: u64,
    /// `m`, must be positive.
    pub modulus: u64,
    /// Number of values to produce.
    pub count: usize,
}

/// Largest `f64` strictly below 1.0.
const MAX_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

fn check_modulus(modulus: u64) -> Result<()> {
    if modulus == 0 {
        return Err(LcgError::InvalidParameter(
            "modulus m must be greater than zero".to_owned(),
        ));
    }
    Ok(())
}

impl GeneratorParameters {
    /// Range checks only, usable before any generator is built.
    pub fn validate(&self) -> Result<()> {
        check_modulus(self.modulus)
    }
}

/// Stateful LCG.
#[derive(Debug, Copy, Clone)]
pub struct Lcg {
    state: u64,
    multiplier: u64,
    increment: u64,
    modulus: u64,
}

impl Lcg {
    /// Fails if `modulus` is zero. The seed is reduced modulo `modulus`.
    pub fn new(seed: u64, multiplier: u64, increment: u64, modulus: u64) -> Result<Self> {
        check_modulus(modulus)?;
        if multiplier % modulus == 0 {
            warn!(
                "multiplier {multiplier} is a multiple of modulus {modulus}, \
                 the sequence is constant"
            );
        }
        Ok(Lcg {
            state: seed % modulus,
            multiplier,
            increment,
            modulus,
        })
    }

    pub fn from_params(params: &GeneratorParameters) -> Result<Self> {
        Self::new(
            params.seed,
            params.multiplier,
            params.increment,
            params.modulus,
        )
    }

    /// Current internal state, always `< modulus`.
    pub fn state(&self) -> u64 {
        self.state
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Advance the state one step and return it.
    pub fn next_state(&mut self) -> u64 {
        let next = (self.multiplier as u128 * self.state as u128 + self.increment as u128)
            % self.modulus as u128;
        // next < modulus <= u64::MAX
        self.state = next as u64;
        self.state
    }

    /// Advance the state one step and return `state / modulus` in [0, 1).
    /// For moduli above 2^53 the division can round up to 1.0, such results
    /// are pulled back to the largest value below 1.0.
    pub fn next_f64(&mut self) -> f64 {
        let x = self.next_state();
        (x as f64 / self.modulus as f64).min(MAX_BELOW_ONE)
    }

    /// Advance the generator state by the specified amount of steps.
    pub fn advance(&mut self, delta: usize) {
        for _ in 0..delta {
            self.next_state();
        }
    }

    /// Reset to the state `::new(seed, ..)` would produce, keeping a, c and m.
    pub fn reseed(&mut self, seed: u64) {
        self.state = seed % self.modulus;
    }
}

impl Iterator for Lcg {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

/// Produce `params.count` values in [0, 1).
pub fn generate(params: &GeneratorParameters) -> Result<Vec<f64>> {
    let mut lcg = Lcg::from_params(params)?;
    debug!(
        "generating {} values with a={} c={} m={} (x0={})",
        params.count,
        params.multiplier,
        params.increment,
        params.modulus,
        lcg.state()
    );
    let mut sequence = Vec::with_capacity(params.count);
    for _ in 0..params.count {
        let v = lcg.next_f64();
        trace!("x={} v={v}", lcg.state());
        sequence.push(v);
    }
    Ok(sequence)
}

/// Named parameter sets found in the literature.
pub mod presets {
    /// (multiplier, increment, modulus)
    pub type Triple = (u64, u64, u64);

    /// IBM's RANDU, notorious for failing the spectral test.
    pub const RANDU: Triple = (65539, 0, 1 << 31);
    /// Park and Miller minimal standard, revised multiplier.
    pub const MINSTD: Triple = (48271, 0, (1 << 31) - 1);
    /// Example `rand()` from the ANSI C standard.
    pub const ANSI_C: Triple = (1103515245, 12345, 1 << 31);
    pub const NUMERICAL_RECIPES: Triple = (1664525, 1013904223, 1 << 32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn params(
        seed: u64,
        (multiplier, increment, modulus): presets::Triple,
        count: usize,
    ) -> GeneratorParameters {
        GeneratorParameters {
            seed,
            multiplier,
            increment,
            modulus,
            count,
        }
    }

    #[test]
    fn zero_modulus_is_rejected() {
        let p = params(1, (3, 1, 0), 10);
        assert!(matches!(generate(&p), Err(LcgError::InvalidParameter(_))));
        assert!(Lcg::new(1, 3, 1, 0).is_err());
    }

    #[test]
    fn seed_is_reduced_modulo_m() {
        let lcg = Lcg::new(23, 5, 1, 10).unwrap();
        assert_eq!(lcg.state(), 3);
    }

    #[test]
    fn small_lcg_by_hand() {
        // x0 = 7, x = (5x + 3) mod 16
        let mut lcg = Lcg::new(7, 5, 3, 16).unwrap();
        let states: Vec<u64> = (0..4).map(|_| lcg.next_state()).collect();
        assert_eq!(states, vec![6, 1, 8, 11]);
    }

    #[test]
    fn no_overflow_with_full_width_parameters() {
        let mut lcg = Lcg::new(u64::MAX - 1, u64::MAX - 1, 5, u64::MAX).unwrap();
        // (-1 * -1 + 5) mod (2^64 - 1)
        assert_eq!(lcg.next_state(), 6);
        let v = lcg.next_f64();
        assert!((0.0..1.0).contains(&v));
    }

    #[test]
    fn huge_modulus_never_yields_one() {
        // x = m - 1, and (m - 1) / m rounds to 1.0 in f64
        let mut lcg = Lcg::new(1, 1, u64::MAX - 2, u64::MAX).unwrap();
        let v = lcg.next_f64();
        assert_eq!(lcg.state(), u64::MAX - 1);
        assert!(v < 1.0, "v = {v}");
        assert_eq!(v, MAX_BELOW_ONE);

        let seq = generate(&params(1, (1, u64::MAX - 2, u64::MAX), 3)).unwrap();
        assert!(seq.iter().all(|v| (0.0..1.0).contains(v)), "{seq:?}");
    }

    #[test]
    fn validate_only_checks_modulus() {
        assert!(params(1, (4, 1, 2), 3).validate().is_ok());
        assert!(matches!(
            params(1, (4, 1, 0), 3).validate(),
            Err(LcgError::InvalidParameter(_))
        ));
    }

    #[test]
    fn advance_and_reseed_match_fresh_generator() {
        let mut a = Lcg::new(42, 48271, 0, (1 << 31) - 1).unwrap();
        a.advance(10);
        let mut b = Lcg::new(42, 48271, 0, (1 << 31) - 1).unwrap();
        let tenth = b.nth(9).unwrap();
        assert_eq!(a.state() as f64 / a.modulus() as f64, tenth);

        a.reseed(42);
        let mut c = Lcg::new(42, 48271, 0, (1 << 31) - 1).unwrap();
        assert_eq!(a.next_state(), c.next_state());
    }

    #[test]
    fn generate_count_and_range() {
        let seq = generate(&params(12345, presets::NUMERICAL_RECIPES, 1000)).unwrap();
        assert_eq!(seq.len(), 1000);
        assert!(seq.iter().all(|v| (0.0..1.0).contains(v)));
    }

    #[test]
    fn generate_zero_count_is_empty() {
        let seq = generate(&params(1, presets::ANSI_C, 0)).unwrap();
        assert!(seq.is_empty());
    }

    #[test]
    fn constant_sequence_when_multiplier_is_multiple_of_m() {
        let seq = generate(&params(5, (8, 3, 4), 4)).unwrap();
        assert_eq!(seq, vec![0.75; 4]);
    }

    #[test]
    fn randu_matches_its_recurrence() {
        let (a, c, m) = presets::RANDU;
        let mut lcg = Lcg::new(1, a, c, m).unwrap();
        assert_eq!(lcg.next_state(), 65539);
        assert_eq!(lcg.next_state(), 393225);
    }
}
