//! Sensor domain model.
//!
//! A sensor is a physical welding-monitoring device identified by its
//! hardware (MAC) address. Its configuration carries the work-day window
//! and the consumable references used when aggregating reports.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Configuration record for one welding sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    /// Unique hardware address, e.g. `"aa:bb:cc:dd:ee:ff"`.
    pub mac_address: String,
    /// Human-readable device name shown in the dashboard.
    pub device_name: String,
    /// Physical location of the device.
    pub location: String,
    /// Sampling interval in seconds. Must be positive.
    pub measurement_period: u32,
    /// Currently assigned worker, if any.
    pub worker_id: Option<i64>,
    /// Welding wire diameter reference.
    pub wire_diameter_id: Option<i64>,
    /// Weld metal reference.
    pub weld_metal_id: Option<i64>,
    /// Welding gas reference.
    pub welding_gas_id: Option<i64>,
    /// Configured start of the work day (sensor-local time of day).
    pub workday_start: NaiveTime,
    /// Configured end of the work day (sensor-local time of day).
    ///
    /// An end numerically smaller than the start means an overnight shift
    /// spilling into the next calendar day.
    pub workday_end: NaiveTime,
    /// Fixed UTC offset of the sensor's local time reference, in minutes.
    pub utc_offset_minutes: i32,
}

impl Sensor {
    /// Check the configuration invariants that aggregation depends on.
    ///
    /// Returns the reason the configuration is unusable, or `None` when it
    /// is valid. A work-day end equal to the start is unresolvable (the
    /// window would be either empty or the full day); an end before the
    /// start is a valid overnight shift.
    pub fn config_error(&self) -> Option<String> {
        if self.measurement_period == 0 {
            return Some("measurement_period must be positive".to_string());
        }
        if self.workday_start == self.workday_end {
            return Some("work-day start and end must differ".to_string());
        }
        // FixedOffset accepts strictly less than a day in either direction.
        if self.utc_offset_minutes.abs() >= 24 * 60 {
            return Some(format!(
                "utc_offset_minutes {} out of range",
                self.utc_offset_minutes
            ));
        }
        None
    }

    /// Whether the configured work day crosses midnight.
    pub fn is_overnight(&self) -> bool {
        self.workday_end < self.workday_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn sensor() -> Sensor {
        Sensor {
            mac_address: "aa:bb:cc:dd:ee:ff".to_string(),
            device_name: "Bay 3 welder".to_string(),
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

    #[test]
    fn valid_config_has_no_error() {
        assert!(sensor().config_error().is_none());
    }

    #[test]
    fn zero_period_is_invalid() {
        let mut s = sensor();
        s.measurement_period = 0;
        assert!(s.config_error().is_some());
    }

    #[test]
    fn equal_window_bounds_are_invalid() {
        let mut s = sensor();
        s.workday_end = s.workday_start;
        assert!(s.config_error().is_some());
    }

    #[test]
    fn overnight_shift_is_valid() {
        let mut s = sensor();
        s.workday_start = NaiveTime::from_hms_opt(22, 0, 0).unwrap();
        s.workday_end = NaiveTime::from_hms_opt(6, 0, 0).unwrap();
        assert!(s.config_error().is_none());
        assert!(s.is_overnight());
    }

    #[test]
    fn huge_offset_is_invalid() {
        let mut s = sensor();
        s.utc_offset_minutes = 24 * 60;
        assert!(s.config_error().is_some());
    }
}
