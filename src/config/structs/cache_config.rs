use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// Freshness window in milliseconds, `0` disables caching.
    pub duration_ms: u64,
    pub single_flight: bool,
}
