//! Daily aggregator.
//!
//! Reduces the ordered measurement sequence of one sensor-day into
//! work/idle totals, consumable totals, and a fixed-size bucket series.
//!
//! Attribution rules: the elapsed time between two adjacent samples is
//! attributed to the *earlier* sample's activity state, and consumables
//! are integrated with a left-Riemann sum using the earlier sample's
//! instantaneous rates. The spans from window start to the first sample
//! and from the last sample to window end are attributed to idle with
//! zero rates — no telemetry implies no confirmed work.

use chrono::Duration;

use crate::domain::errors::{EngineError, EngineResult};
use crate::domain::models::{ActivityState, DailyReport, Measurement, ReportTotals, Sensor, SeriesBucket};
use crate::services::interval::DayWindow;
use crate::services::scoring::PerformanceScorer;

/// Bucket interval used for the series of a plain daily report, seconds.
pub const DEFAULT_SERIES_INTERVAL_SECS: u32 = 900;

/// Build the daily report for one resolved sensor-day window.
///
/// `samples` must be the time-ordered output of the measurement store for
/// `[window.start, window.end]`, including a closing sample recorded
/// exactly at the window end. An empty slice is valid and produces a
/// zero-work, idle-filled report.
pub fn compute_report(
    sensor: &Sensor,
    window: &DayWindow,
    samples: &[Measurement],
    interval_secs: u32,
    scorer: &dyn PerformanceScorer,
) -> EngineResult<DailyReport> {
    validate_interval(sensor, interval_secs)?;

    let (totals, series) = reduce(window, samples, interval_secs);
    let score = scorer.score(&totals);

    Ok(DailyReport {
        mac_address: sensor.mac_address.clone(),
        date: window.date,
        window_start: window.start,
        window_end: window.end,
        totals,
        score,
        series_interval_secs: interval_secs,
        series,
    })
}

/// Check that a display bucket interval is usable for a sensor.
///
/// The sensor's sampling period must divide evenly into every bucket size
/// used for display; anything else is a caller input error.
pub fn validate_interval(sensor: &Sensor, interval_secs: u32) -> EngineResult<()> {
    if interval_secs == 0 {
        return Err(EngineError::InvalidInterval(
            "bucket interval must be positive".to_string(),
        ));
    }
    if sensor.measurement_period > 0 && interval_secs % sensor.measurement_period != 0 {
        return Err(EngineError::InvalidInterval(format!(
            "bucket interval {interval_secs}s is not a multiple of the {}s measurement period",
            sensor.measurement_period
        )));
    }
    Ok(())
}

/// Single-pass fold over the ordered samples of one window.
///
/// Returns the window totals and the bucket series. The series always has
/// `ceil(window / interval)` entries; buckets with no telemetry in range
/// are idle-filled, never omitted. All duration arithmetic is integer
/// milliseconds, so summing the buckets' work/idle values reproduces the
/// totals exactly and `working + idle` equals the window length exactly.
pub(crate) fn reduce(
    window: &DayWindow,
    samples: &[Measurement],
    interval_secs: u32,
) -> (ReportTotals, Vec<SeriesBucket>) {
    let start_ms = window.start.timestamp_millis();
    let end_ms = window.end.timestamp_millis();
    let interval_ms = i64::from(interval_secs) * 1_000;

    let bucket_count = usize::try_from((end_ms - start_ms + interval_ms - 1) / interval_ms)
        .unwrap_or_default();
    let mut buckets: Vec<SeriesBucket> = (0..bucket_count)
        .map(|i| SeriesBucket::empty(window.start + Duration::milliseconds(interval_ms * i as i64)))
        .collect();

    let mut totals = ReportTotals::default();

    // Attribution carried forward from the most recent sample. The lead-in
    // span is idle with zero rates.
    let mut cursor = start_ms;
    let mut state = ActivityState::Idle;
    let mut wire_rate = 0.0;
    let mut gas_rate = 0.0;

    for sample in samples {
        let sample_ms = sample.recorded_at.timestamp_millis().clamp(start_ms, end_ms);
        if sample_ms > cursor {
            attribute_span(
                &mut totals,
                &mut buckets,
                start_ms,
                interval_ms,
                cursor,
                sample_ms,
                state,
                wire_rate,
                gas_rate,
            );
            cursor = sample_ms;
        }
        // Duplicate timestamps collapse to a zero-length span; the latest
        // sample at an instant provides the attribution going forward.
        state = sample.state;
        wire_rate = sample.wire_feed_rate;
        gas_rate = sample.gas_flow_rate;
    }

    // Trailing un-sampled span is idle, regardless of the last state seen.
    if cursor < end_ms {
        attribute_span(
            &mut totals,
            &mut buckets,
            start_ms,
            interval_ms,
            cursor,
            end_ms,
            ActivityState::Idle,
            0.0,
            0.0,
        );
    }

    (totals, buckets)
}

/// Attribute one homogeneous span to the totals and to every bucket it
/// overlaps, clipping at bucket boundaries.
#[allow(clippy::too_many_arguments)]
fn attribute_span(
    totals: &mut ReportTotals,
    buckets: &mut [SeriesBucket],
    window_start_ms: i64,
    interval_ms: i64,
    span_start_ms: i64,
    span_end_ms: i64,
    state: ActivityState,
    wire_rate: f64,
    gas_rate: f64,
) {
    let span_ms = span_end_ms - span_start_ms;
    debug_assert!(span_ms > 0);

    let wire_m = integrate(wire_rate, span_ms);
    let gas_l = integrate(gas_rate, span_ms);
    match state {
        ActivityState::Working => totals.working_ms += span_ms,
        ActivityState::Idle => totals.idle_ms += span_ms,
    }
    totals.wire_m += wire_m;
    totals.gas_l += gas_l;

    let mut index = usize::try_from((span_start_ms - window_start_ms) / interval_ms)
        .unwrap_or_default();
    let mut clip_start = span_start_ms;
    while clip_start < span_end_ms && index < buckets.len() {
        let bucket_end = window_start_ms + interval_ms * (index as i64 + 1);
        let clip_end = span_end_ms.min(bucket_end);
        let clip_ms = clip_end - clip_start;

        let bucket = &mut buckets[index];
        match state {
            ActivityState::Working => bucket.working_ms += clip_ms,
            ActivityState::Idle => bucket.idle_ms += clip_ms,
        }
        bucket.wire_m += integrate(wire_rate, clip_ms);
        bucket.gas_l += integrate(gas_rate, clip_ms);

        clip_start = clip_end;
        index += 1;
    }
}

/// Left-Riemann time integral of a per-minute rate over a span.
fn integrate(rate_per_minute: f64, span_ms: i64) -> f64 {
    rate_per_minute * span_ms as f64 / 60_000.0
}
