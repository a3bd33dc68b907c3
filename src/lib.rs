// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Linear congruential generator with methods for inspecting the quality
//! of its output: mean, standard deviation, runs, chi-square and histogram.

pub mod analysis;
pub mod error;
pub mod export;
pub mod histogram;
pub mod render;
pub mod rngs;
pub mod stats;
mod strings;
pub mod utils;

pub use analysis::{analyze, AnalysisResult, StatisticsReport, Verdict};
pub use error::{LcgError, Result};
pub use histogram::{bin, Histogram};
pub use rngs::{generate, GeneratorParameters, Lcg};
