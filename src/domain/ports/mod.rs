//! Port trait definitions (Hexagonal Architecture)
//!
//! Async trait interfaces for the external collaborators the engine reads
//! from:
//! - `SensorRegistry`: sensor configuration lookup
//! - `MeasurementStore`: ranged reads over raw telemetry
//! - `WorkerDirectory`: worker resolution and day-scoped assignments
//!
//! These traits keep the aggregation logic independent of any specific
//! persistence technology.

pub mod errors;
pub mod measurement_store;
pub mod sensor_registry;
pub mod worker_directory;

pub use errors::StoreError;
pub use measurement_store::MeasurementStore;
pub use sensor_registry::SensorRegistry;
pub use worker_directory::WorkerDirectory;
