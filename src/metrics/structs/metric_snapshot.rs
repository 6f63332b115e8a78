use std::collections::BTreeMap;
use crate::metrics::structs::metric_family::MetricFamily;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSnapshot {
    pub families: Vec<MetricFamily>,
    /// Torrents per qBittorrent state.
    pub state_counts: BTreeMap<String, u64>,
    /// Torrents per resolved tracker label.
    pub tracker_counts: BTreeMap<String, u64>,
    pub torrents: usize,
}
