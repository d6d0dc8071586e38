//! Weekly aggregator.
//!
//! Composes seven daily reports into week-level totals and performs the
//! cross-report selections: best daily report and best worker. The
//! fetching side (resolving windows, reading measurements, hydrating the
//! winning worker) lives in the statistics facade; everything here is a
//! pure, deterministic function over already-computed daily reports so
//! the tie-break rules are trivially testable.

use std::collections::HashMap;

use crate::domain::models::{DailyReport, ReportTotals};

/// Element-wise sum of the daily totals.
pub fn sum_totals(days: &[DailyReport]) -> ReportTotals {
    let mut totals = ReportTotals::default();
    for day in days {
        totals.accumulate(&day.totals);
    }
    totals
}

/// Index of the best daily report: highest score, earliest date on ties.
///
/// `days` must be ordered by date (Monday first), which makes "first
/// strict maximum" the earliest-date tie-break. An all-zero week selects
/// Monday's zero-valued report, never nothing: callers must always have a
/// report to render.
pub fn best_report_index(days: &[DailyReport]) -> usize {
    let mut best = 0;
    for (index, day) in days.iter().enumerate().skip(1) {
        if day.score > days[best].score {
            best = index;
        }
    }
    best
}

/// Best worker of the week, as an identifier.
///
/// `assignments[i]` is the worker on duty for `days[i]` (day-scoped: a
/// sensor's worker can change during the week). Each assigned day
/// contributes its report score to that worker's weekly sum; the highest
/// sum wins, ties break toward the lowest worker id. `None` when no day
/// had an assignment — explicitly distinct from a zero-scored worker.
pub fn best_worker_id(days: &[DailyReport], assignments: &[Option<i64>]) -> Option<i64> {
    let mut sums: HashMap<i64, f64> = HashMap::new();
    for (day, assignment) in days.iter().zip(assignments) {
        if let Some(worker_id) = assignment {
            *sums.entry(*worker_id).or_insert(0.0) += day.score;
        }
    }

    let mut best: Option<(i64, f64)> = None;
    for (&worker_id, &sum) in &sums {
        best = match best {
            None => Some((worker_id, sum)),
            Some((best_id, best_sum)) => {
                if sum > best_sum || (sum == best_sum && worker_id < best_id) {
                    Some((worker_id, sum))
                } else {
                    Some((best_id, best_sum))
                }
            }
        };
    }
    best.map(|(worker_id, _)| worker_id)
}
