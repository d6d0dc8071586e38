use crate::domain::models::Measurement;
use crate::domain::ports::errors::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Read-only port to the append-only telemetry store.
#[async_trait]
pub trait MeasurementStore: Send + Sync {
    /// Fetch the samples for one sensor in `[start, end]`, ordered by
    /// timestamp ascending. Both bounds are inclusive: a sample recorded
    /// exactly at the window end closes the day's final span and must be
    /// returned. An empty result is valid data, not an error; duplicate
    /// timestamps are tolerated downstream.
    async fn read_range(
        &self,
        mac_address: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Measurement>, StoreError>;
}
