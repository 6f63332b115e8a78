use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PerformanceConfig {
    pub parallel_api_calls: bool,
}
