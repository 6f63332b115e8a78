use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct QbittorrentConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
    /// Request timeout in seconds.
    pub timeout: u64,
}
