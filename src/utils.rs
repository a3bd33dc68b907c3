// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Misc utility functions.

use std::time::Duration;

pub const INV_ROOT2: f64 = 0.7071067811865475;

/// Format a duration into a short human readable String.
/// e.g. 1.5 seconds is "1.500 s", 2.3 milliseconds is "2.300 ms".
pub fn format_elapsed_time(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs >= 60.0 {
        format!("{}m {:02}s", elapsed.as_secs() / 60, elapsed.as_secs() % 60)
    } else if secs >= 1.0 {
        format!("{:.3} s", secs)
    } else if secs >= 1e-3 {
        format!("{:.3} ms", secs * 1e3)
    } else {
        format!("{:.3} µs", secs * 1e6)
    }
}

/// Format an optional probability, "n/a" when it could not be computed.
pub fn format_p(p: Option<f64>) -> String {
    match p {
        Some(p) => format!("{:.6}", p),
        None => "n/a".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn elapsed_time_units() {
        assert_eq!(format_elapsed_time(Duration::from_micros(250)), "250.000 µs");
        assert_eq!(format_elapsed_time(Duration::from_micros(2300)), "2.300 ms");
        assert_eq!(format_elapsed_time(Duration::from_millis(1500)), "1.500 s");
        assert_eq!(format_elapsed_time(Duration::from_secs(125)), "2m 05s");
    }

    #[test]
    fn optional_p() {
        assert_eq!(format_p(Some(0.5)), "0.500000");
        assert_eq!(format_p(None), "n/a");
    }
}
