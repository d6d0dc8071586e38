//! Engine error taxonomy.
//!
//! Missing or sparse telemetry inside a valid window is deliberately NOT an
//! error: it degrades to an idle-filled, zero-consumable report so the
//! presentation layer can always render a report shape.

use thiserror::Error;

use crate::domain::ports::errors::StoreError;

/// Errors surfaced by the aggregation engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested sensor does not exist. Surfaced as a "not found"
    /// condition by the caller; not retryable.
    #[error("sensor not found: {0}")]
    SensorNotFound(String),

    /// The sensor's stored configuration cannot produce a valid window.
    /// Fatal for that sensor until the configuration is fixed.
    #[error("invalid configuration for sensor {mac_address}: {reason}")]
    InvalidSensorConfig {
        mac_address: String,
        reason: String,
    },

    /// Malformed calendar input or bucket interval. Caller input error.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),

    /// The measurement store or sensor registry is unreachable. Safe to
    /// retry with backoff; never treated as "no data".
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

impl EngineError {
    pub(crate) fn invalid_config(mac_address: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSensorConfig {
            mac_address: mac_address.to_string(),
            reason: reason.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
