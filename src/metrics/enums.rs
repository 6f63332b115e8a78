//! Metric enumerations.

/// Prometheus metric types.
pub mod metric_type;
