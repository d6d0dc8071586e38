//! Weldtrack - Welding Telemetry Statistics Engine
//!
//! Weldtrack aggregates raw welding-sensor telemetry into daily and
//! weekly performance reports: work/idle time attribution, consumable
//! usage integrals, bucketed time series, and best-report / best-worker
//! selections over configurable work-day windows.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Models, port traits, and the error taxonomy
//! - **Service Layer** (`services`): Interval resolution, aggregation, scoring, caching
//! - **Infrastructure Layer** (`infrastructure`): Configuration, logging, `SQLite` adapters
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use weldtrack::infrastructure::database::{
//!     DatabaseConnection, SqliteMeasurementStore, SqliteSensorRegistry, SqliteWorkerDirectory,
//! };
//! use weldtrack::services::StatisticsService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let db = DatabaseConnection::new("sqlite:.weldtrack/weldtrack.db").await?;
//!     db.migrate().await?;
//!
//!     let service = StatisticsService::new(
//!         Arc::new(SqliteSensorRegistry::new(db.pool().clone())),
//!         Arc::new(SqliteMeasurementStore::new(db.pool().clone())),
//!         Arc::new(SqliteWorkerDirectory::new(db.pool().clone())),
//!     );
//!     let report = service
//!         .compute_daily_report("aa:bb:cc:dd:ee:ff", chrono::Utc::now().date_naive())
//!         .await?;
//!     println!("score: {}", report.score);
//!     Ok(())
//! }
//! ```

pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{EngineError, EngineResult};
pub use domain::models::{
    ActivityState, Config, DailyReport, Measurement, ReportTotals, Sensor, SensorPerformance,
    SeriesBucket, WeeklyReport, Worker,
};
pub use domain::ports::{MeasurementStore, SensorRegistry, StoreError, WorkerDirectory};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{
    DailyReportCache, PerformanceScorer, StatisticsService, UtilizationScorer,
};
