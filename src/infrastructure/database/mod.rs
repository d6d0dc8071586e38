//! `SQLite` adapters for the engine's ports.

pub mod connection;
pub mod measurement_repo;
pub mod sensor_repo;
pub mod utils;
pub mod worker_repo;

pub use connection::DatabaseConnection;
pub use measurement_repo::SqliteMeasurementStore;
pub use sensor_repo::SqliteSensorRegistry;
pub use worker_repo::SqliteWorkerDirectory;
