//! Collector structures.

/// Upstream poller and snapshot builder.
pub mod collector;
