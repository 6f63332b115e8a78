use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use std::time::Duration;
use parking_lot::RwLock;
use crate::cache::structs::cache_record::CacheRecord;
use crate::collector::structs::collector::Collector;

pub struct MetricsCache {
    pub(crate) collector: Arc<Collector>,
    pub(crate) window: Duration,
    pub(crate) single_flight: bool,
    pub(crate) record: RwLock<Option<Arc<CacheRecord>>>,
    pub(crate) refresh_lock: tokio::sync::Mutex<()>,
    /// Successful polls since startup.
    pub(crate) collections: AtomicU64,
}
