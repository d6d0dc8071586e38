//! Domain models for the weldtrack statistics engine.

pub mod config;
pub mod measurement;
pub mod report;
pub mod sensor;
pub mod worker;

pub use config::{CacheConfig, Config, DatabaseConfig, LoggingConfig};
pub use measurement::{ActivityState, Measurement};
pub use report::{DailyReport, ReportTotals, SensorPerformance, SeriesBucket, WeeklyReport};
pub use sensor::Sensor;
pub use worker::Worker;
