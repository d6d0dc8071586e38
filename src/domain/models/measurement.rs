//! Raw telemetry samples.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Activity state reported by a sensor at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityState {
    /// The welder was actively working when sampled.
    Working,
    /// The welder was idle when sampled.
    Idle,
}

impl ActivityState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::Idle => "idle",
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "working" => Some(Self::Working),
            "idle" => Some(Self::Idle),
            _ => None,
        }
    }
}

/// One raw telemetry sample.
///
/// Samples are ordered by `recorded_at` within a sensor. Duplicate
/// timestamps and gaps are both possible and are tolerated by the
/// aggregation layer (a gap is attributed to idle time).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Hardware address of the sensor that produced the sample.
    pub mac_address: String,
    /// UTC instant at which the sample was taken.
    pub recorded_at: DateTime<Utc>,
    /// Activity state at the instant of sampling.
    pub state: ActivityState,
    /// Instantaneous wire-feed rate, metres per minute.
    pub wire_feed_rate: f64,
    /// Instantaneous gas-flow rate, litres per minute.
    pub gas_flow_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_state_round_trips_through_str() {
        assert_eq!(
            ActivityState::from_str(ActivityState::Working.as_str()),
            Some(ActivityState::Working)
        );
        assert_eq!(
            ActivityState::from_str(ActivityState::Idle.as_str()),
            Some(ActivityState::Idle)
        );
        assert_eq!(ActivityState::from_str("WORKING"), Some(ActivityState::Working));
        assert_eq!(ActivityState::from_str("unknown"), None);
    }
}
