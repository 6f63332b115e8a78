use serde::{Deserialize, Serialize};
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::metrics_config::MetricsConfig;
use crate::config::structs::performance_config::PerformanceConfig;
use crate::config::structs::qbittorrent_config::QbittorrentConfig;
use crate::config::structs::sentry_config::SentryConfig;
use crate::config::structs::server_config::ServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub qbittorrent: QbittorrentConfig,
    pub server: ServerConfig,
    pub cache: CacheConfig,
    pub metrics: MetricsConfig,
    pub performance: PerformanceConfig,
    pub sentry_config: SentryConfig,
    /// Tracker mapping table, kept in document order.
    pub trackers: toml::Table,
}
