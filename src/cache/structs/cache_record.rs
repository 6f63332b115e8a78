use std::sync::Arc;
use std::time::Instant;
use crate::metrics::structs::metric_snapshot::MetricSnapshot;

#[derive(Debug, Clone)]
pub struct CacheRecord {
    pub snapshot: Arc<MetricSnapshot>,
    pub produced_at: Instant,
}
