use crate::config::structs::performance_config::PerformanceConfig;

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel_api_calls: true,
        }
    }
}
