use crate::config::structs::qbittorrent_config::QbittorrentConfig;

impl Default for QbittorrentConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            username: "admin".to_string(),
            password: "adminadmin".to_string(),
            timeout: 10,
        }
    }
}
