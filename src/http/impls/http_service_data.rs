use std::sync::Arc;
use crate::cache::structs::metrics_cache::MetricsCache;
use crate::config::structs::server_config::ServerConfig;
use crate::http::structs::http_service_data::HttpServiceData;

impl HttpServiceData {
    pub fn new(metrics_cache: Arc<MetricsCache>, server_config: Arc<ServerConfig>) -> HttpServiceData {
        HttpServiceData { metrics_cache, server_config }
    }

    pub fn metrics_path(&self) -> &str {
        &self.server_config.metrics_path
    }
}
