use std::thread::available_parallelism;
use crate::config::structs::server_config::ServerConfig;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:17871".to_string(),
            metrics_path: "/metrics".to_string(),
            threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1),
            keep_alive: 60,
            request_timeout: 30,
            disconnect_timeout: 30,
        }
    }
}
