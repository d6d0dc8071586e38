use crate::domain::models::Sensor;
use crate::domain::ports::errors::StoreError;
use async_trait::async_trait;

/// Read-only port to the sensor configuration registry.
///
/// The engine never writes sensor records; configuration editing belongs
/// to the surrounding dashboard.
#[async_trait]
pub trait SensorRegistry: Send + Sync {
    /// Look up a sensor by its hardware address.
    async fn get_sensor(&self, mac_address: &str) -> Result<Option<Sensor>, StoreError>;

    /// List every registered sensor, ordered by hardware address.
    async fn list_sensors(&self) -> Result<Vec<Sensor>, StoreError>;
}
