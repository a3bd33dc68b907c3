// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Runs the generator and every statistic over its output.

use std::{
    ops::Mul,
    time::{Duration, Instant},
};

use log::{debug, warn};

use crate::{
    error::{LcgError, Result},
    histogram::{self, Histogram},
    render,
    rngs::{self, GeneratorParameters},
    stats, strings, utils,
};

const P_LOG_STAT_LIMIT: f64 = 3.0;
const P_LOG_STAT_MARGINAL: f64 = 2.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StatisticsReport {
    pub mean: f64,
    pub stddev: f64,
    pub runs: u64,
    pub chi_square: f64,
    pub runs_p: Option<f64>,
    pub chi_square_p: Option<f64>,
}

/// Everything produced by one call to [`analyze`].
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub params: GeneratorParameters,
    pub sequence: Vec<f64>,
    pub histogram: Histogram,
    pub statistics: StatisticsReport,
    pub time_used: Duration,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Marginal,
    Fail,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Pass => strings::PASS_STR,
            Verdict::Marginal => strings::MARGINAL_STR,
            Verdict::Fail => strings::FAIL_STR,
        }
    }
}

#[derive(Debug, Copy, Clone)]
pub struct TestResult {
    test_id: usize,
    p: Option<f64>,
}

impl TestResult {
    pub fn name(&self) -> &'static str {
        strings::TEST_NAMES[self.test_id]
    }
    pub fn p(&self) -> Option<f64> {
        self.p
    }
    pub fn logstat(&self) -> Option<f64> {
        self.p.map(p_log_stat)
    }
    /// None when no p value could be computed.
    pub fn verdict(&self) -> Option<Verdict> {
        self.logstat().map(|ls| {
            if ls < P_LOG_STAT_MARGINAL {
                Verdict::Pass
            } else if ls < P_LOG_STAT_LIMIT {
                Verdict::Marginal
            } else {
                Verdict::Fail
            }
        })
    }
    pub fn format(&self) -> String {
        format!(
            "{:<10}: p: {:>8}     pls: {:>6}   - {}",
            self.name(),
            utils::format_p(self.p),
            self.logstat()
                .map_or_else(|| "n/a".to_owned(), |ls| format!("{:.4}", ls)),
            self.verdict().map_or("not computed", |v| v.as_str())
        )
    }
}

/// Logarithmic quantity to specify how close to 1.0 or 0.0 a p-value is.
/// Has a range of 0-9.9999.
/// -0.2 * (log2(min(p, 1-p)) - 1) clamped to 9.9999
pub fn p_log_stat(p: f64) -> f64 {
    (p.min(1.0 - p).log2() - 1.0).mul(-0.2).min(9.9999)
}

fn validate(params: &GeneratorParameters, bin_count: usize) -> Result<()> {
    params.validate()?;
    if bin_count == 0 {
        return Err(LcgError::InvalidParameter(
            "bin count must be greater than zero".to_owned(),
        ));
    }
    if params.modulus < bin_count as u64 {
        warn!(
            "modulus {} is smaller than the bin count {}, some bins can never be hit",
            params.modulus, bin_count
        );
    }
    Ok(())
}

/// Generate the sequence, bin it and compute all statistics.
pub fn analyze(params: &GeneratorParameters, bin_count: usize) -> Result<AnalysisResult> {
    let start = Instant::now();
    validate(params, bin_count)?;
    let sequence = rngs::generate(params)?;
    let histogram = histogram::bin(&sequence, bin_count)?;

    let mean = stats::mean(&sequence)?;
    let stddev = stats::stddev(&sequence)?;
    let (runs, steps) = stats::runs_with_steps(&sequence);
    let expected = histogram.uniform_expected();
    let chi_square = stats::chi_square(&histogram.counts, &expected)?;

    let statistics = StatisticsReport {
        mean,
        stddev,
        runs,
        chi_square,
        runs_p: stats::runs_p_value(runs, steps),
        chi_square_p: stats::chi_squared_p_value(bin_count - 1, chi_square),
    };
    let time_used = start.elapsed();
    debug!("analysis finished in {}", utils::format_elapsed_time(time_used));
    Ok(AnalysisResult {
        params: *params,
        sequence,
        histogram,
        statistics,
        time_used,
    })
}

impl AnalysisResult {
    pub fn test_results(&self) -> [TestResult; 2] {
        [
            TestResult {
                test_id: 0,
                p: self.statistics.runs_p,
            },
            TestResult {
                test_id: 1,
                p: self.statistics.chi_square_p,
            },
        ]
    }

    /// Text report: parameters, statistics, verdicts and the first
    /// `preview` values of the sequence.
    pub fn format_report(&self, preview: usize) -> String {
        let p = &self.params;
        let s = &self.statistics;
        let mut lines = vec![
            format!("LCG analysis ({})", chrono::Local::now().format("%F %T")),
            format!(
                "seed: {}  a: {}  c: {}  m: {}  n: {}  bins: {}",
                p.seed, p.multiplier, p.increment, p.modulus, p.count, self.histogram.bin_count
            ),
            format!("Runs:        {}", s.runs),
            format!("Chi-square:  {:.4}", s.chi_square),
            format!("Mean:        {:.6}", s.mean),
            format!("Std dev:     {:.6}", s.stddev),
        ];
        lines.extend(self.test_results().iter().map(TestResult::format));
        lines.push(format!(
            "Sample:      {}",
            render::sample_preview(&self.sequence, preview)
        ));
        lines.push(format!("Time: {}", utils::format_elapsed_time(self.time_used)));
        lines.join("\n")
    }
}
