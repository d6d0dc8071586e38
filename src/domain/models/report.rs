//! Derived report values.
//!
//! Reports are read-only aggregates produced on demand from raw
//! measurements. Durations are tracked as integer milliseconds so that
//! work + idle always reproduces the window length exactly, with no
//! floating-point drift between a day's totals and its bucketed series.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::worker::Worker;

/// Summed work/idle time and consumable usage for one report window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Total confirmed working time, milliseconds.
    pub working_ms: i64,
    /// Total idle (or un-sampled) time, milliseconds.
    pub idle_ms: i64,
    /// Total wire consumed, metres.
    pub wire_m: f64,
    /// Total gas consumed, litres.
    pub gas_l: f64,
}

impl ReportTotals {
    /// Element-wise accumulation, used when composing weekly totals.
    pub fn accumulate(&mut self, other: &Self) {
        self.working_ms += other.working_ms;
        self.idle_ms += other.idle_ms;
        self.wire_m += other.wire_m;
        self.gas_l += other.gas_l;
    }

    /// Window length covered by these totals, milliseconds.
    pub fn window_ms(&self) -> i64 {
        self.working_ms + self.idle_ms
    }
}

/// One fixed-size bucket of the display series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesBucket {
    /// Start instant of the bucket (UTC).
    pub bucket_start: DateTime<Utc>,
    /// Working time attributed to this bucket, milliseconds.
    pub working_ms: i64,
    /// Idle time attributed to this bucket, milliseconds.
    pub idle_ms: i64,
    /// Wire consumed within this bucket, metres.
    pub wire_m: f64,
    /// Gas consumed within this bucket, litres.
    pub gas_l: f64,
}

impl SeriesBucket {
    /// A zero-valued bucket starting at the given instant.
    pub fn empty(bucket_start: DateTime<Utc>) -> Self {
        Self {
            bucket_start,
            working_ms: 0,
            idle_ms: 0,
            wire_m: 0.0,
            gas_l: 0.0,
        }
    }
}

/// Aggregate over one sensor-day. Immutable once the day has closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    /// Hardware address of the sensor this report describes.
    pub mac_address: String,
    /// Calendar date of the work day (sensor-local).
    pub date: NaiveDate,
    /// UTC start of the resolved work-day window.
    pub window_start: DateTime<Utc>,
    /// UTC end of the resolved work-day window.
    pub window_end: DateTime<Utc>,
    /// Work/idle/consumable totals for the window.
    pub totals: ReportTotals,
    /// Performance score of the totals.
    pub score: f64,
    /// Bucket interval used for the series, seconds.
    pub series_interval_secs: u32,
    /// Display series, always `ceil(window / interval)` entries.
    pub series: Vec<SeriesBucket>,
}

/// Aggregate over one sensor ISO week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    /// Hardware address of the sensor this report describes.
    pub mac_address: String,
    /// ISO week-numbering year.
    pub iso_year: i32,
    /// ISO week number (1-53).
    pub iso_week: u32,
    /// Element-wise sum of the seven daily totals.
    pub totals: ReportTotals,
    /// Performance score of the summed totals.
    pub score: f64,
    /// The week's daily reports, Monday first, always length 7.
    pub days: Vec<DailyReport>,
    /// Best daily report of the week by score, earliest date on ties.
    /// A week with no data at all still yields the (zero-valued) Monday
    /// report so callers always have something to render.
    pub best_report: DailyReport,
    /// Worker with the highest summed per-day score across the week, if
    /// any day had an assignment.
    pub best_worker: Option<Worker>,
}

/// One row of the sensor-list ranking view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPerformance {
    /// Hardware address of the ranked sensor.
    pub mac_address: String,
    /// Display name of the ranked sensor.
    pub device_name: String,
    /// Daily totals the ranking is based on.
    pub totals: ReportTotals,
    /// Performance score of the totals.
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_accumulate_element_wise() {
        let mut a = ReportTotals {
            working_ms: 1_000,
            idle_ms: 2_000,
            wire_m: 1.5,
            gas_l: 3.0,
        };
        let b = ReportTotals {
            working_ms: 500,
            idle_ms: 250,
            wire_m: 0.5,
            gas_l: 1.0,
        };
        a.accumulate(&b);
        assert_eq!(a.working_ms, 1_500);
        assert_eq!(a.idle_ms, 2_250);
        assert!((a.wire_m - 2.0).abs() < f64::EPSILON);
        assert!((a.gas_l - 4.0).abs() < f64::EPSILON);
        assert_eq!(a.window_ms(), 3_750);
    }
}
