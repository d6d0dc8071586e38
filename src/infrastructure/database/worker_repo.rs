use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Row, SqlitePool};

use crate::domain::models::Worker;
use crate::domain::ports::{StoreError, WorkerDirectory};

/// `SQLite` implementation of [`WorkerDirectory`].
///
/// Day-scoped duty lookups read the `worker_assignments` table first and
/// only fall back to the sensor's current `worker_id` when no record
/// exists for that day. The fallback keeps installations that never
/// record assignments working, at the cost of attributing all history to
/// the current worker.
pub struct SqliteWorkerDirectory {
    pool: SqlitePool,
}

impl SqliteWorkerDirectory {
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WorkerDirectory for SqliteWorkerDirectory {
    async fn get_worker(&self, worker_id: i64) -> Result<Option<Worker>, StoreError> {
        let row = sqlx::query("SELECT id, first_name, last_name FROM workers WHERE id = ?")
            .bind(worker_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Worker {
                id: row.try_get("id")?,
                first_name: row.try_get("first_name")?,
                last_name: row.try_get("last_name")?,
            })),
            None => Ok(None),
        }
    }

    async fn worker_on_duty(
        &self,
        mac_address: &str,
        date: NaiveDate,
    ) -> Result<Option<i64>, StoreError> {
        let assignment = sqlx::query(
            "SELECT worker_id FROM worker_assignments WHERE mac_address = ? AND work_date = ?",
        )
        .bind(mac_address)
        .bind(date.format("%Y-%m-%d").to_string())
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = assignment {
            return Ok(Some(row.try_get("worker_id")?));
        }

        let sensor = sqlx::query("SELECT worker_id FROM sensors WHERE mac_address = ?")
            .bind(mac_address)
            .fetch_optional(&self.pool)
            .await?;

        match sensor {
            Some(row) => Ok(row.try_get("worker_id")?),
            None => Ok(None),
        }
    }
}
