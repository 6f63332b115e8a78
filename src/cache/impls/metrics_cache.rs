use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use log::{debug, info};
use parking_lot::RwLock;
use crate::cache::structs::cache_record::CacheRecord;
use crate::cache::structs::metrics_cache::MetricsCache;
use crate::collector::structs::collector::Collector;
use crate::config::structs::cache_config::CacheConfig;
use crate::metrics::structs::metric_snapshot::MetricSnapshot;
use crate::qbittorrent::errors::UpstreamError;

impl MetricsCache {
    pub fn new(collector: Arc<Collector>, window: Duration, single_flight: bool) -> MetricsCache {
        MetricsCache {
            collector,
            window,
            single_flight,
            record: RwLock::new(None),
            refresh_lock: tokio::sync::Mutex::new(()),
            collections: AtomicU64::new(0),
        }
    }

    pub fn from_config(collector: Arc<Collector>, config: &CacheConfig) -> MetricsCache {
        Self::new(collector, config.window(), config.single_flight)
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn collections(&self) -> u64 {
        self.collections.load(Ordering::SeqCst)
    }

    pub fn record(&self) -> Option<Arc<CacheRecord>> {
        self.record.read().clone()
    }

    pub async fn get_snapshot(&self) -> Result<Arc<MetricSnapshot>, UpstreamError> {
        self.get_snapshot_at(Instant::now()).await
    }

    /// Returns the cached snapshot if it is younger than the window at `now`,
    /// otherwise polls and stores a new one.
    pub async fn get_snapshot_at(&self, now: Instant) -> Result<Arc<MetricSnapshot>, UpstreamError> {
        if let Some(snapshot) = self.fresh_snapshot(now) {
            return Ok(snapshot);
        }

        if !self.single_flight {
            return self.refresh(now).await;
        }

        let _guard = self.refresh_lock.lock().await;
        if let Some(snapshot) = self.fresh_snapshot(now) {
            return Ok(snapshot);
        }
        self.refresh(now).await
    }

    fn fresh_snapshot(&self, now: Instant) -> Option<Arc<MetricSnapshot>> {
        let record = self.record()?;
        if !record.is_fresh(now, self.window) {
            return None;
        }
        debug!("[CACHE] Serving cached snapshot, age {:?}", record.age(now));
        Some(record.snapshot.clone())
    }

    async fn refresh(&self, now: Instant) -> Result<Arc<MetricSnapshot>, UpstreamError> {
        let start = Instant::now();
        let snapshot = Arc::new(self.collector.collect().await?);
        // Age counts from poll completion; a caller clock ahead of it wins.
        let produced_at = now.max(Instant::now());
        *self.record.write() = Some(Arc::new(CacheRecord::new(snapshot.clone(), produced_at)));
        self.collections.fetch_add(1, Ordering::SeqCst);
        info!("[CACHE] Collected metrics for {} torrents in {:?}", snapshot.torrents, start.elapsed());
        Ok(snapshot)
    }
}
