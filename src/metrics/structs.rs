//! Metric structures.

/// One poll worth of metrics.
pub mod metric_snapshot;

/// Named group of points sharing help text and type.
pub mod metric_family;

/// Single labelled value.
pub mod metric_point;
