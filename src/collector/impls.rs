//! Implementation blocks for the collector.

/// Upstream reads and snapshot assembly.
pub mod collector;
