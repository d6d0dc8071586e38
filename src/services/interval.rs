//! Interval calculator.
//!
//! Resolves a sensor's configured work-day window against a calendar date
//! or an ISO week into the concrete UTC instants to query the measurement
//! store with. Pure functions, no side effects.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveDateTime, Utc, Weekday};

use crate::domain::errors::{EngineError, EngineResult};
use crate::domain::models::Sensor;

/// A resolved `[start, end)` query window for one sensor-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    /// The calendar date (sensor-local) this window belongs to.
    pub date: NaiveDate,
    /// UTC start of the work day.
    pub start: DateTime<Utc>,
    /// UTC end of the work day. Always strictly after `start`.
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// Window length in milliseconds.
    pub fn len_ms(&self) -> i64 {
        (self.end - self.start).num_milliseconds()
    }

    /// Whether the window has fully elapsed (the day is closed).
    pub fn is_closed(&self, now: DateTime<Utc>) -> bool {
        self.end <= now
    }
}

/// Resolve the concrete UTC window for one sensor-day.
///
/// The date is combined with the sensor's configured work-day start/end
/// times at the sensor's fixed UTC offset. An end time-of-day smaller
/// than the start means an overnight shift: the window runs into the
/// next calendar day rather than being truncated.
pub fn resolve_day(sensor: &Sensor, date: NaiveDate) -> EngineResult<DayWindow> {
    if let Some(reason) = sensor.config_error() {
        return Err(EngineError::invalid_config(&sensor.mac_address, reason));
    }

    let offset = FixedOffset::east_opt(sensor.utc_offset_minutes * 60).ok_or_else(|| {
        EngineError::invalid_config(
            &sensor.mac_address,
            format!("utc_offset_minutes {} out of range", sensor.utc_offset_minutes),
        )
    })?;

    let end_date = if sensor.is_overnight() {
        date.succ_opt()
            .ok_or_else(|| EngineError::InvalidInterval(format!("date {date} out of range")))?
    } else {
        date
    };

    let start = to_utc(date.and_time(sensor.workday_start), offset);
    let end = to_utc(end_date.and_time(sensor.workday_end), offset);

    Ok(DayWindow { date, start, end })
}

/// Resolve the seven day windows of an ISO week, Monday first.
pub fn resolve_week(sensor: &Sensor, iso_year: i32, iso_week: u32) -> EngineResult<Vec<DayWindow>> {
    if !(1..=53).contains(&iso_week) {
        return Err(EngineError::InvalidInterval(format!(
            "ISO week {iso_week} out of range 1-53"
        )));
    }

    let monday = NaiveDate::from_isoywd_opt(iso_year, iso_week, Weekday::Mon).ok_or_else(|| {
        EngineError::InvalidInterval(format!("ISO week {iso_week} does not exist in {iso_year}"))
    })?;

    (0..7)
        .map(|day| {
            let date = monday
                .checked_add_days(Days::new(day))
                .ok_or_else(|| EngineError::InvalidInterval(format!("date out of range in week {iso_week}")))?;
            resolve_day(sensor, date)
        })
        .collect()
}

/// Interpret a naive local datetime at a fixed offset and convert to UTC.
fn to_utc(local: NaiveDateTime, offset: FixedOffset) -> DateTime<Utc> {
    // A fixed offset has no DST transitions, so the mapping is total.
    DateTime::<FixedOffset>::from_naive_utc_and_offset(local - offset, offset).with_timezone(&Utc)
}
