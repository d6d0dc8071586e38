//! Service layer: the aggregation engine itself.
//!
//! Pure computation modules (`interval`, `daily`, `weekly`, `scoring`)
//! plus the memoization layer and the [`StatisticsService`] facade that
//! wires them to the ports.

pub mod daily;
pub mod interval;
pub mod report_cache;
pub mod scoring;
pub mod statistics;
pub mod weekly;

pub use daily::DEFAULT_SERIES_INTERVAL_SECS;
pub use interval::DayWindow;
pub use report_cache::DailyReportCache;
pub use scoring::{PerformanceScorer, UtilizationScorer};
pub use statistics::StatisticsService;
