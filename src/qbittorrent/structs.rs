//! Web API records and client structures.

/// Entry of `/api/v2/torrents/info`.
pub mod torrent;

/// Response of `/api/v2/app/preferences`.
pub mod preferences;

/// Response of `/api/v2/sync/maindata`.
pub mod main_data;

/// The `server_state` object of the main data.
pub mod server_state;

/// Cookie based Web API client.
pub mod qbittorrent_client;
