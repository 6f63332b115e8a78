use crate::config::structs::metrics_config::MetricsConfig;

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            collect_torrent_info: true,
        }
    }
}
