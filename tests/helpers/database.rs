//! Shared database fixtures for integration tests.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;

use weldtrack::domain::models::config::DatabaseConfig;
use weldtrack::infrastructure::database::DatabaseConnection;

/// Fresh migrated in-memory database.
///
/// Held to a single connection: an in-memory `SQLite` database exists per
/// connection, so a larger pool would scatter tables across databases.
pub async fn setup_database() -> DatabaseConnection {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
    };
    let db = DatabaseConnection::from_config(&config)
        .await
        .expect("failed to create test database");
    db.migrate().await.expect("failed to run migrations");
    db
}

/// Insert a sensor with an 08:00-16:00 UTC work day and a 60 s sampling
/// period.
pub async fn seed_sensor(pool: &SqlitePool, mac_address: &str, worker_id: Option<i64>) {
    sqlx::query(
        "INSERT INTO sensors (mac_address, device_name, location, measurement_period, \
         worker_id, workday_start, workday_end, utc_offset_minutes) \
         VALUES (?, 'test welder', 'Hall A', 60, ?, '08:00:00', '16:00:00', 0)",
    )
    .bind(mac_address)
    .bind(worker_id)
    .execute(pool)
    .await
    .expect("failed to seed sensor");
}

pub async fn seed_worker(pool: &SqlitePool, id: i64, first_name: &str, last_name: &str) {
    sqlx::query("INSERT INTO workers (id, first_name, last_name) VALUES (?, ?, ?)")
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .execute(pool)
        .await
        .expect("failed to seed worker");
}

pub async fn seed_measurement(
    pool: &SqlitePool,
    mac_address: &str,
    recorded_at: DateTime<Utc>,
    state: &str,
    wire_feed_rate: f64,
    gas_flow_rate: f64,
) {
    sqlx::query(
        "INSERT INTO measurements (mac_address, recorded_at, state, wire_feed_rate, gas_flow_rate) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(mac_address)
    .bind(recorded_at.to_rfc3339())
    .bind(state)
    .bind(wire_feed_rate)
    .bind(gas_flow_rate)
    .execute(pool)
    .await
    .expect("failed to seed measurement");
}

pub async fn seed_assignment(
    pool: &SqlitePool,
    mac_address: &str,
    work_date: NaiveDate,
    worker_id: i64,
) {
    sqlx::query(
        "INSERT INTO worker_assignments (mac_address, work_date, worker_id) VALUES (?, ?, ?)",
    )
    .bind(mac_address)
    .bind(work_date.format("%Y-%m-%d").to_string())
    .bind(worker_id)
    .execute(pool)
    .await
    .expect("failed to seed assignment");
}
