use async_trait::async_trait;
use crate::qbittorrent::errors::UpstreamError;
use crate::qbittorrent::structs::main_data::MainData;
use crate::qbittorrent::structs::preferences::Preferences;
use crate::qbittorrent::structs::torrent::Torrent;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QbittorrentApi: Send + Sync {
    async fn get_torrents(&self) -> Result<Vec<Torrent>, UpstreamError>;

    async fn get_preferences(&self) -> Result<Preferences, UpstreamError>;

    async fn get_main_data(&self) -> Result<MainData, UpstreamError>;

    async fn get_version(&self) -> Result<String, UpstreamError>;
}
