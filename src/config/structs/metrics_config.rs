use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct MetricsConfig {
    pub collect_torrent_info: bool,
}
