use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ServerState {
    pub alltime_dl: i64,
    pub alltime_ul: i64,
    pub dl_info_data: i64,
    pub up_info_data: i64,
    pub dl_info_speed: i64,
    pub up_info_speed: i64,
    pub dl_rate_limit: i64,
    pub up_rate_limit: i64,
    /// Sent as a decimal string by qBittorrent.
    pub global_ratio: String,
    pub use_alt_speed_limits: bool,
}
