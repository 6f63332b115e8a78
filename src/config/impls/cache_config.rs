use std::time::Duration;
use crate::config::structs::cache_config::CacheConfig;

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            duration_ms: 5000,
            single_flight: true,
        }
    }
}

impl CacheConfig {
    pub fn window(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}
