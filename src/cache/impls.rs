/// Freshness checks for cached records.
pub mod cache_record;

/// Snapshot lookup and refresh.
pub mod metrics_cache;
