use crate::domain::models::Worker;
use crate::domain::ports::errors::StoreError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read-only port to the worker directory and assignment history.
///
/// Worker assignment is a day-scoped fact: the worker operating a sensor
/// can change from day to day, and a weekly best-worker computation must
/// attribute each day to whoever was assigned on that day, not to the
/// sensor's current worker.
#[async_trait]
pub trait WorkerDirectory: Send + Sync {
    /// Resolve a worker id to its display entity.
    async fn get_worker(&self, worker_id: i64) -> Result<Option<Worker>, StoreError>;

    /// The worker assigned to a sensor on a given calendar date.
    ///
    /// Implementations consult the assignment history first and may fall
    /// back to the sensor's current assignment for days with no recorded
    /// history. `None` means the sensor was unattended that day.
    async fn worker_on_duty(
        &self,
        mac_address: &str,
        date: NaiveDate,
    ) -> Result<Option<i64>, StoreError>;
}
