//! Property tests for the daily aggregator's exactness guarantees:
//! work + idle always telescopes to the window length, the bucket series
//! always has `ceil(window / interval)` entries, and summing the buckets
//! reproduces the totals.

use chrono::{Duration, NaiveDate, NaiveTime};
use proptest::prelude::*;

use weldtrack::domain::models::{ActivityState, Measurement, Sensor};
use weldtrack::services::daily;
use weldtrack::services::interval;
use weldtrack::services::UtilizationScorer;

const WINDOW_SECS: i64 = 8 * 3_600;

fn sensor() -> Sensor {
    Sensor {
        mac_address: "aa:bb:cc:dd:ee:ff".to_string(),
        device_name: "prop welder".to_string(),
        location: "Hall A".to_string(),
        measurement_period: 60,
        worker_id: None,
        wire_diameter_id: None,
        weld_metal_id: None,
        welding_gas_id: None,
        workday_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
        workday_end: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
        utc_offset_minutes: 0,
    }
}

/// Arbitrary ordered telemetry inside the 8 h window.
fn samples_strategy() -> impl Strategy<Value = Vec<(i64, bool, f64, f64)>> {
    prop::collection::vec(
        (
            0..WINDOW_SECS,
            any::<bool>(),
            0.0..20.0f64,
            0.0..30.0f64,
        ),
        0..64,
    )
    .prop_map(|mut entries| {
        entries.sort_by_key(|(offset, ..)| *offset);
        entries
    })
}

fn build_measurements(sensor: &Sensor, entries: &[(i64, bool, f64, f64)]) -> Vec<Measurement> {
    let window = interval::resolve_day(sensor, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
        .expect("window should resolve");
    entries
        .iter()
        .map(|&(offset, working, wire, gas)| Measurement {
            mac_address: sensor.mac_address.clone(),
            recorded_at: window.start + Duration::seconds(offset),
            state: if working {
                ActivityState::Working
            } else {
                ActivityState::Idle
            },
            wire_feed_rate: wire,
            gas_flow_rate: gas,
        })
        .collect()
}

proptest! {
    #[test]
    fn work_and_idle_telescope_to_the_window(entries in samples_strategy()) {
        let sensor = sensor();
        let window = interval::resolve_day(&sensor, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
            .expect("window should resolve");
        let samples = build_measurements(&sensor, &entries);

        let report = daily::compute_report(&sensor, &window, &samples, 900, &UtilizationScorer)
            .expect("report should compute");

        prop_assert_eq!(
            report.totals.working_ms + report.totals.idle_ms,
            window.len_ms()
        );
    }

    #[test]
    fn series_length_is_the_ceiling_of_the_window(
        entries in samples_strategy(),
        interval_secs in prop::sample::select(vec![300u32, 600, 900, 1_500, 1_800, 3_600, 7_200]),
    ) {
        let sensor = sensor();
        let window = interval::resolve_day(&sensor, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
            .expect("window should resolve");
        let samples = build_measurements(&sensor, &entries);

        let report = daily::compute_report(&sensor, &window, &samples, interval_secs, &UtilizationScorer)
            .expect("report should compute");

        let expected =
            (window.len_ms() + i64::from(interval_secs) * 1_000 - 1) / (i64::from(interval_secs) * 1_000);
        prop_assert_eq!(report.series.len() as i64, expected);
    }

    #[test]
    fn bucket_sums_reproduce_the_totals(
        entries in samples_strategy(),
        interval_secs in prop::sample::select(vec![300u32, 900, 1_500, 3_600]),
    ) {
        let sensor = sensor();
        let window = interval::resolve_day(&sensor, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
            .expect("window should resolve");
        let samples = build_measurements(&sensor, &entries);

        let report = daily::compute_report(&sensor, &window, &samples, interval_secs, &UtilizationScorer)
            .expect("report should compute");

        let working: i64 = report.series.iter().map(|b| b.working_ms).sum();
        let idle: i64 = report.series.iter().map(|b| b.idle_ms).sum();
        let wire: f64 = report.series.iter().map(|b| b.wire_m).sum();
        let gas: f64 = report.series.iter().map(|b| b.gas_l).sum();

        prop_assert_eq!(working, report.totals.working_ms);
        prop_assert_eq!(idle, report.totals.idle_ms);
        prop_assert!((wire - report.totals.wire_m).abs() < 1e-6);
        prop_assert!((gas - report.totals.gas_l).abs() < 1e-6);
    }

    #[test]
    fn score_is_always_a_unit_fraction(entries in samples_strategy()) {
        let sensor = sensor();
        let window = interval::resolve_day(&sensor, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap())
            .expect("window should resolve");
        let samples = build_measurements(&sensor, &entries);

        let report = daily::compute_report(&sensor, &window, &samples, 900, &UtilizationScorer)
            .expect("report should compute");

        prop_assert!((0.0..=1.0).contains(&report.score));
    }
}
