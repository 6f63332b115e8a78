/// Snapshot with its production time.
pub mod cache_record;

/// TTL gate in front of the collector.
pub mod metrics_cache;
