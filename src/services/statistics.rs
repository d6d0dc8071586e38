//! Statistics facade.
//!
//! The single entry point the presentation layer talks to. Orchestrates
//! the interval calculator, measurement reads, the daily/weekly
//! aggregators, the scorer, and the closed-day report cache. Stateless
//! apart from the cache; safe to share across concurrent callers.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use futures::future::try_join_all;
use tracing::{debug, instrument, warn};

use crate::domain::errors::{EngineError, EngineResult};
use crate::domain::models::{
    DailyReport, ReportTotals, Sensor, SensorPerformance, SeriesBucket, WeeklyReport,
};
use crate::domain::ports::{MeasurementStore, SensorRegistry, WorkerDirectory};
use crate::services::daily::{self, DEFAULT_SERIES_INTERVAL_SECS};
use crate::services::interval::{self, DayWindow};
use crate::services::report_cache::DailyReportCache;
use crate::services::scoring::{PerformanceScorer, UtilizationScorer};
use crate::services::weekly;

/// Aggregation engine over the three external collaborators.
pub struct StatisticsService<R, M, W> {
    registry: Arc<R>,
    store: Arc<M>,
    workers: Arc<W>,
    scorer: Arc<dyn PerformanceScorer>,
    cache: Arc<DailyReportCache>,
}

impl<R, M, W> StatisticsService<R, M, W>
where
    R: SensorRegistry,
    M: MeasurementStore,
    W: WorkerDirectory,
{
    /// Create a service with the default scorer and an enabled cache.
    pub fn new(registry: Arc<R>, store: Arc<M>, workers: Arc<W>) -> Self {
        Self {
            registry,
            store,
            workers,
            scorer: Arc::new(UtilizationScorer),
            cache: Arc::new(DailyReportCache::default()),
        }
    }

    /// Swap in a custom scoring policy.
    pub fn with_scorer(mut self, scorer: Arc<dyn PerformanceScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Use a specific cache instance (or a disabled one).
    pub fn with_cache(mut self, cache: Arc<DailyReportCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Daily report for one sensor-day, series at the default display
    /// interval.
    #[instrument(skip(self))]
    pub async fn compute_daily_report(
        &self,
        mac_address: &str,
        date: NaiveDate,
    ) -> EngineResult<DailyReport> {
        let sensor = self.sensor(mac_address).await?;
        let window = interval::resolve_day(&sensor, date)?;
        self.daily_for_window(&sensor, window).await
    }

    /// Weekly report for one sensor ISO week.
    #[instrument(skip(self))]
    pub async fn compute_weekly_report(
        &self,
        mac_address: &str,
        iso_year: i32,
        iso_week: u32,
    ) -> EngineResult<WeeklyReport> {
        let sensor = self.sensor(mac_address).await?;
        let windows = interval::resolve_week(&sensor, iso_year, iso_week)?;

        let days: Vec<DailyReport> = try_join_all(
            windows
                .iter()
                .map(|window| self.daily_for_window(&sensor, *window)),
        )
        .await?;

        let assignments: Vec<Option<i64>> = try_join_all(
            windows
                .iter()
                .map(|window| self.workers.worker_on_duty(mac_address, window.date)),
        )
        .await?;

        let totals = weekly::sum_totals(&days);
        let score = self.scorer.score(&totals);
        let best_report = days[weekly::best_report_index(&days)].clone();

        let best_worker = match weekly::best_worker_id(&days, &assignments) {
            Some(worker_id) => {
                let worker = self.workers.get_worker(worker_id).await?;
                if worker.is_none() {
                    warn!(worker_id, "best worker id not resolvable in directory");
                }
                worker
            }
            None => None,
        };

        debug!(
            mac_address,
            iso_year,
            iso_week,
            score,
            best_date = %best_report.date,
            "weekly report computed"
        );

        Ok(WeeklyReport {
            mac_address: mac_address.to_string(),
            iso_year,
            iso_week,
            totals,
            score,
            days,
            best_report,
            best_worker,
        })
    }

    /// Standalone bucketed series at a caller-chosen interval.
    #[instrument(skip(self))]
    pub async fn bucketed_series(
        &self,
        mac_address: &str,
        date: NaiveDate,
        interval_secs: u32,
    ) -> EngineResult<Vec<SeriesBucket>> {
        let sensor = self.sensor(mac_address).await?;
        let window = interval::resolve_day(&sensor, date)?;
        daily::validate_interval(&sensor, interval_secs)?;

        let samples = self
            .store
            .read_range(mac_address, window.start, window.end)
            .await?;
        let (_, series) = daily::reduce(&window, &samples, interval_secs);
        Ok(series)
    }

    /// Score report totals with the configured policy. Exposed so the
    /// sensor-list view can rank sensors without recomputing full reports.
    pub fn score(&self, totals: &ReportTotals) -> f64 {
        self.scorer.score(totals)
    }

    /// Every registered sensor ranked by its daily score for `date`,
    /// highest first; ties break by hardware address so the listing is
    /// stable. Sensors with unusable configuration are skipped rather
    /// than failing the whole listing.
    #[instrument(skip(self))]
    pub async fn sensor_rankings(&self, date: NaiveDate) -> EngineResult<Vec<SensorPerformance>> {
        let sensors = self.registry.list_sensors().await?;

        let mut rankings = Vec::with_capacity(sensors.len());
        for sensor in sensors {
            let window = match interval::resolve_day(&sensor, date) {
                Ok(window) => window,
                Err(EngineError::InvalidSensorConfig { mac_address, reason }) => {
                    warn!(%mac_address, %reason, "skipping sensor in ranking");
                    continue;
                }
                Err(other) => return Err(other),
            };
            let report = self.daily_for_window(&sensor, window).await?;
            rankings.push(SensorPerformance {
                mac_address: sensor.mac_address,
                device_name: sensor.device_name,
                totals: report.totals,
                score: report.score,
            });
        }

        rankings.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.mac_address.cmp(&b.mac_address))
        });
        Ok(rankings)
    }

    /// Drop a sensor's cached daily reports. Call after editing its
    /// work-day window configuration, since past windows resolve
    /// differently afterwards.
    pub fn invalidate_sensor(&self, mac_address: &str) {
        self.cache.invalidate_sensor(mac_address);
    }

    async fn sensor(&self, mac_address: &str) -> EngineResult<Sensor> {
        self.registry
            .get_sensor(mac_address)
            .await?
            .ok_or_else(|| EngineError::SensorNotFound(mac_address.to_string()))
    }

    /// Compute (or reuse) the daily report for an already-resolved
    /// window. Only closed days go through the cache.
    async fn daily_for_window(
        &self,
        sensor: &Sensor,
        window: DayWindow,
    ) -> EngineResult<DailyReport> {
        let closed = window.is_closed(Utc::now());
        self.cache
            .get_or_compute(&sensor.mac_address, window.date, closed, || async move {
                let samples = self
                    .store
                    .read_range(&sensor.mac_address, window.start, window.end)
                    .await?;
                daily::compute_report(
                    sensor,
                    &window,
                    &samples,
                    DEFAULT_SERIES_INTERVAL_SECS,
                    self.scorer.as_ref(),
                )
            })
            .await
    }
}
