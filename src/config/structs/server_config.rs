use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_address: String,
    pub metrics_path: String,
    pub threads: u64,
    pub keep_alive: u64,
    pub request_timeout: u64,
    pub disconnect_timeout: u64,
}
