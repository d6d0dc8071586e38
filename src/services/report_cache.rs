//! Cache for closed-day daily reports.
//!
//! Past days are immutable, so their reports can be memoized per
//! `(sensor, date)`. The cache guarantees at most one computation in
//! flight per key under concurrent requests (per-key `OnceCell`) and
//! never stores the still-open current day, whose report changes as new
//! measurements arrive. Entries for a sensor are dropped when its
//! work-day configuration changes.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::domain::errors::EngineResult;
use crate::domain::models::config::CacheConfig;
use crate::domain::models::DailyReport;

type CacheKey = (String, NaiveDate);

/// Default bound on the number of cached sensor-days.
pub const DEFAULT_MAX_ENTRIES: usize = 4_096;

/// Memoization layer for immutable daily reports.
///
/// Bounded: once `max_entries` sensor-days are held, inserting a new key
/// evicts the entry with the oldest date, so a long-running process does
/// not accumulate a report per closed day per sensor forever.
pub struct DailyReportCache {
    enabled: bool,
    max_entries: usize,
    entries: Mutex<HashMap<CacheKey, Arc<OnceCell<DailyReport>>>>,
}

impl DailyReportCache {
    pub fn new(enabled: bool) -> Self {
        Self::with_max_entries(enabled, DEFAULT_MAX_ENTRIES)
    }

    /// Cache with an explicit bound on held sensor-days.
    pub fn with_max_entries(enabled: bool, max_entries: usize) -> Self {
        Self {
            enabled,
            max_entries: max_entries.max(1),
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Cache configured from the application config.
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::with_max_entries(config.enabled, config.max_entries)
    }

    /// Return the cached report for a closed day, computing and storing it
    /// on first access. Open days (`closed == false`) bypass the cache
    /// entirely. A failed computation leaves the cell empty, so the next
    /// caller retries.
    pub async fn get_or_compute<F, Fut>(
        &self,
        mac_address: &str,
        date: NaiveDate,
        closed: bool,
        compute: F,
    ) -> EngineResult<DailyReport>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = EngineResult<DailyReport>>,
    {
        if !self.enabled || !closed {
            return compute().await;
        }

        let key = (mac_address.to_string(), date);
        let cell = {
            let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
            let cell = entries.entry(key.clone()).or_default().clone();
            // Evict the oldest other days once the bound is reached. The
            // evicted cell stays alive for any in-flight holder; only the
            // memoization is lost.
            while entries.len() > self.max_entries {
                let victim = entries
                    .keys()
                    .filter(|k| **k != key)
                    .min_by_key(|(_, entry_date)| *entry_date)
                    .cloned();
                match victim {
                    Some(victim) => {
                        entries.remove(&victim);
                    }
                    None => break,
                }
            }
            cell
        };

        let report = cell.get_or_try_init(compute).await?;
        Ok(report.clone())
    }

    /// Drop every cached day of one sensor. Called when the sensor's
    /// work-day window configuration changes, since past windows resolve
    /// differently afterwards.
    pub fn invalidate_sensor(&self, mac_address: &str) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let before = entries.len();
        entries.retain(|(mac, _), _| mac != mac_address);
        debug!(
            mac_address,
            dropped = before - entries.len(),
            "invalidated cached daily reports"
        );
    }

    /// Number of keyed entries currently held (occupied or in flight).
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DailyReportCache {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::EngineError;
    use crate::domain::models::ReportTotals;
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::sync::atomic::{AtomicU32, Ordering};

    fn report(date: NaiveDate) -> DailyReport {
        DailyReport {
            mac_address: "aa:bb:cc:dd:ee:ff".to_string(),
            date,
            window_start: Utc.with_ymd_and_hms(2024, 3, 4, 8, 0, 0).unwrap(),
            window_end: Utc.with_ymd_and_hms(2024, 3, 4, 16, 0, 0).unwrap(),
            totals: ReportTotals::default(),
            score: 0.0,
            series_interval_secs: 900,
            series: vec![],
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    #[tokio::test]
    async fn closed_days_are_computed_once() {
        let cache = DailyReportCache::new(true);
        let calls = AtomicU32::new(0);

        for _ in 0..3 {
            let result = cache
                .get_or_compute("aa", day(), true, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(report(day()))
                })
                .await;
            assert!(result.is_ok());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn open_days_bypass_the_cache() {
        let cache = DailyReportCache::new(true);
        let calls = AtomicU32::new(0);

        for _ in 0..3 {
            cache
                .get_or_compute("aa", day(), false, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(report(day()))
                })
                .await
                .unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn disabled_cache_always_recomputes() {
        let cache = DailyReportCache::new(false);
        let calls = AtomicU32::new(0);

        for _ in 0..2 {
            cache
                .get_or_compute("aa", day(), true, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(report(day()))
                })
                .await
                .unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_computations_are_not_cached() {
        let cache = DailyReportCache::new(true);
        let calls = AtomicU32::new(0);

        let first = cache
            .get_or_compute("aa", day(), true, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(EngineError::InvalidInterval("boom".to_string()))
            })
            .await;
        assert!(first.is_err());

        let second = cache
            .get_or_compute("aa", day(), true, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(report(day()))
            })
            .await;
        assert!(second.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn concurrent_requests_compute_at_most_once() {
        let cache = Arc::new(DailyReportCache::new(true));
        let calls = Arc::new(AtomicU32::new(0));

        let compute = |calls: Arc<AtomicU32>| async move {
            calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            Ok(report(day()))
        };

        let (a, b) = tokio::join!(
            cache.get_or_compute("aa", day(), true, || compute(calls.clone())),
            cache.get_or_compute("aa", day(), true, || compute(calls.clone())),
        );
        assert!(a.is_ok() && b.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn oldest_days_are_evicted_at_the_bound() {
        let cache = DailyReportCache::with_max_entries(true, 2);
        for day in [4, 5, 6] {
            let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
            cache
                .get_or_compute("aa", date, true, || async move { Ok(report(date)) })
                .await
                .unwrap();
        }
        assert_eq!(cache.len(), 2);

        // The oldest day was evicted and recomputes; the newest did not.
        let calls = AtomicU32::new(0);
        for day in [4, 6] {
            let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
            cache
                .get_or_compute("aa", date, true, || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(report(date))
                })
                .await
                .unwrap();
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn invalidation_drops_only_the_named_sensor() {
        let cache = DailyReportCache::new(true);
        for mac in ["aa", "bb"] {
            cache
                .get_or_compute(mac, day(), true, || async { Ok(report(day())) })
                .await
                .unwrap();
        }
        assert_eq!(cache.len(), 2);

        cache.invalidate_sensor("aa");
        assert_eq!(cache.len(), 1);

        let calls = AtomicU32::new(0);
        cache
            .get_or_compute("aa", day(), true, || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(report(day()))
            })
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
