use std::sync::Arc;
use crate::cache::structs::metrics_cache::MetricsCache;
use crate::config::structs::server_config::ServerConfig;

pub struct HttpServiceData {
    pub metrics_cache: Arc<MetricsCache>,
    pub server_config: Arc<ServerConfig>,
}
