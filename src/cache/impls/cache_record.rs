use std::sync::Arc;
use std::time::{Duration, Instant};
use crate::cache::structs::cache_record::CacheRecord;
use crate::metrics::structs::metric_snapshot::MetricSnapshot;

impl CacheRecord {
    pub fn new(snapshot: Arc<MetricSnapshot>, produced_at: Instant) -> CacheRecord {
        CacheRecord { snapshot, produced_at }
    }

    /// Zero when `now` is earlier than `produced_at`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.produced_at)
    }

    pub fn is_fresh(&self, now: Instant, window: Duration) -> bool {
        self.age(now) < window
    }
}
