//! Snapshot cache module.
//!
//! `MetricsCache` sits in front of the `Collector` and decides, per scrape,
//! whether the last snapshot can be served again or a new poll is needed.
//!
//! # Behaviour
//!
//! - **Fresh**: the stored record is younger than the window; its snapshot is
//!   returned as the same `Arc` and no upstream request is made.
//! - **Empty / Stale**: the collector runs. A successful poll replaces the
//!   record, a failed one leaves the previous record untouched and the error is
//!   returned to the caller that triggered it.
//! - A window of zero disables caching; every scrape polls.
//!
//! # Concurrency
//!
//! The record is an `Arc<CacheRecord>` behind a `parking_lot::RwLock`: readers
//! clone the pointer, a refresh swaps it. With `single_flight` enabled,
//! concurrent misses wait on an async refresh lock and re-check freshness once
//! they hold it, so a burst of scrapes at expiry results in one poll.
//!
//! # Example
//!
//! ```rust,ignore
//! use qbittorrent_exporter::cache::structs::metrics_cache::MetricsCache;
//!
//! let cache = MetricsCache::from_config(collector, &config.cache);
//! let snapshot = cache.get_snapshot().await?;
//! ```

/// Implementation blocks for the cache record and gate.
pub mod impls;

/// Cache data structures.
pub mod structs;

/// Unit tests for the cache gate.
pub mod tests;
