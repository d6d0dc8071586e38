//! Performance scoring strategy.
//!
//! The score is a single comparable number summarizing a report's work
//! efficiency. The exact formula is an internal policy behind the
//! [`PerformanceScorer`] trait so it can be swapped without touching the
//! aggregation logic; any implementation must be monotone non-decreasing
//! in working time (idle fixed), monotone non-increasing in idle time
//! (working fixed), and bitwise deterministic so that "best" selections
//! are reproducible.

use crate::domain::models::ReportTotals;

/// Pluggable scoring policy.
pub trait PerformanceScorer: Send + Sync {
    /// Score a report's totals. Same inputs must yield a bit-identical
    /// result.
    fn score(&self, totals: &ReportTotals) -> f64;
}

/// Default policy: fraction of the window spent working.
///
/// `working / (working + idle)`, or `0.0` for an empty window. The
/// baseline for an all-zero report is therefore `0.0`, and a day with no
/// telemetry (zero work, full-window idle) scores the same baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct UtilizationScorer;

impl PerformanceScorer for UtilizationScorer {
    fn score(&self, totals: &ReportTotals) -> f64 {
        let window_ms = totals.window_ms();
        if window_ms <= 0 {
            return 0.0;
        }
        totals.working_ms as f64 / window_ms as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(working_ms: i64, idle_ms: i64) -> ReportTotals {
        ReportTotals {
            working_ms,
            idle_ms,
            wire_m: 0.0,
            gas_l: 0.0,
        }
    }

    #[test]
    fn all_zero_baseline_is_zero() {
        assert_eq!(UtilizationScorer.score(&ReportTotals::default()), 0.0);
    }

    #[test]
    fn idle_only_day_scores_the_baseline() {
        assert_eq!(UtilizationScorer.score(&totals(0, 8 * 3_600_000)), 0.0);
    }

    #[test]
    fn full_working_day_scores_one() {
        assert_eq!(UtilizationScorer.score(&totals(8 * 3_600_000, 0)), 1.0);
    }

    #[test]
    fn monotone_in_working_time() {
        let idle = 4 * 3_600_000;
        let mut previous = f64::MIN;
        for hours in 0..=8 {
            let score = UtilizationScorer.score(&totals(hours * 3_600_000, idle));
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn antitone_in_idle_time() {
        let working = 4 * 3_600_000;
        let mut previous = f64::MAX;
        for hours in 0..=8 {
            let score = UtilizationScorer.score(&totals(working, hours * 3_600_000));
            assert!(score <= previous);
            previous = score;
        }
    }

    #[test]
    fn deterministic_across_calls() {
        let t = totals(3 * 3_600_000 + 123, 5 * 3_600_000 + 77);
        let first = UtilizationScorer.score(&t);
        for _ in 0..10 {
            assert!(UtilizationScorer.score(&t).to_bits() == first.to_bits());
        }
    }
}
