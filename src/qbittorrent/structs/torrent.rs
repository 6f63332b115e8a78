use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Torrent {
    pub name: String,
    pub hash: String,
    pub state: String,
    pub tracker: String,
    pub category: String,
    pub tags: String,
    pub save_path: String,
    pub added_on: i64,
    #[serde(rename = "dlspeed")]
    pub download_speed: i64,
    #[serde(rename = "upspeed")]
    pub upload_speed: i64,
    pub downloaded: i64,
    pub downloaded_session: i64,
    pub uploaded: i64,
    pub uploaded_session: i64,
    pub eta: i64,
    pub progress: f64,
    pub time_active: i64,
    #[serde(rename = "num_seeds")]
    pub seeders: i64,
    #[serde(rename = "num_leechs")]
    pub leechers: i64,
    pub ratio: f64,
    pub max_ratio: f64,
    pub amount_left: i64,
    pub size: i64,
}
