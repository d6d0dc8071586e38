use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use super::utils::parse_time_of_day;
use crate::domain::models::Sensor;
use crate::domain::ports::{SensorRegistry, StoreError};

/// `SQLite` implementation of [`SensorRegistry`].
pub struct SqliteSensorRegistry {
    pool: SqlitePool,
}

impl SqliteSensorRegistry {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const SENSOR_COLUMNS: &str = "mac_address, device_name, location, measurement_period, \
     worker_id, wire_diameter_id, weld_metal_id, welding_gas_id, \
     workday_start, workday_end, utc_offset_minutes";

fn row_to_sensor(row: &SqliteRow) -> Result<Sensor, StoreError> {
    let workday_start: String = row.try_get("workday_start")?;
    let workday_end: String = row.try_get("workday_end")?;
    let measurement_period: i64 = row.try_get("measurement_period")?;

    Ok(Sensor {
        mac_address: row.try_get("mac_address")?,
        device_name: row.try_get("device_name")?,
        location: row.try_get("location")?,
        measurement_period: u32::try_from(measurement_period).map_err(|_| {
            StoreError::MalformedRecord(format!(
                "measurement_period {measurement_period} out of range"
            ))
        })?,
        worker_id: row.try_get("worker_id")?,
        wire_diameter_id: row.try_get("wire_diameter_id")?,
        weld_metal_id: row.try_get("weld_metal_id")?,
        welding_gas_id: row.try_get("welding_gas_id")?,
        workday_start: parse_time_of_day(&workday_start)?,
        workday_end: parse_time_of_day(&workday_end)?,
        utc_offset_minutes: row.try_get("utc_offset_minutes")?,
    })
}

#[async_trait]
impl SensorRegistry for SqliteSensorRegistry {
    async fn get_sensor(&self, mac_address: &str) -> Result<Option<Sensor>, StoreError> {
        let row = sqlx::query(&format!(
            "SELECT {SENSOR_COLUMNS} FROM sensors WHERE mac_address = ?"
        ))
        .bind(mac_address)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_sensor).transpose()
    }

    async fn list_sensors(&self) -> Result<Vec<Sensor>, StoreError> {
        let rows = sqlx::query(&format!(
            "SELECT {SENSOR_COLUMNS} FROM sensors ORDER BY mac_address"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_sensor).collect()
    }
}
