use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub alt_dl_limit: i64,
    pub alt_up_limit: i64,
    pub max_active_downloads: i64,
    pub max_active_uploads: i64,
    pub max_active_torrents: i64,
}
