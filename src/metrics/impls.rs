//! Implementation blocks for metric structures.

/// Exposition rendering and lookups on snapshots.
pub mod metric_snapshot;

/// Family construction and point rendering.
pub mod metric_family;

/// Display for metric types.
pub mod metric_type;
