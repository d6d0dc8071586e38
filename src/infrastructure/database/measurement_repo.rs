use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool};

use super::utils::parse_datetime;
use crate::domain::models::{ActivityState, Measurement};
use crate::domain::ports::{MeasurementStore, StoreError};

/// `SQLite` implementation of [`MeasurementStore`].
pub struct SqliteMeasurementStore {
    pool: SqlitePool,
}

impl SqliteMeasurementStore {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MeasurementStore for SqliteMeasurementStore {
    async fn read_range(
        &self,
        mac_address: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Measurement>, StoreError> {
        // Timestamps are stored as RFC3339 UTC, so lexicographic range
        // comparison matches chronological order and the covering index
        // on (mac_address, recorded_at) applies. The upper bound is
        // inclusive: a sample recorded exactly at the window end closes
        // the final span.
        let rows = sqlx::query(
            "SELECT mac_address, recorded_at, state, wire_feed_rate, gas_flow_rate \
             FROM measurements \
             WHERE mac_address = ? AND recorded_at >= ? AND recorded_at <= ? \
             ORDER BY recorded_at",
        )
        .bind(mac_address)
        .bind(start.to_rfc3339())
        .bind(end.to_rfc3339())
        .fetch_all(&self.pool)
        .await?;

        let mut measurements = Vec::with_capacity(rows.len());
        for row in &rows {
            let recorded_at: String = row.try_get("recorded_at")?;
            let state: String = row.try_get("state")?;

            measurements.push(Measurement {
                mac_address: row.try_get("mac_address")?,
                recorded_at: parse_datetime(&recorded_at)?,
                state: ActivityState::from_str(&state).ok_or_else(|| {
                    StoreError::MalformedRecord(format!("unknown activity state '{state}'"))
                })?,
                wire_feed_rate: row.try_get("wire_feed_rate")?,
                gas_flow_rate: row.try_get("gas_flow_rate")?,
            });
        }
        Ok(measurements)
    }
}
