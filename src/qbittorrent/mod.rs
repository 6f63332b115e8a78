//! qBittorrent Web API client module.
//!
//! Defines the typed records returned by the Web API and the
//! `QbittorrentApi` trait consumed by the collector, together with the
//! `reqwest` based `QbittorrentClient` implementation.
//!
//! # Endpoints
//!
//! - `POST /api/v2/auth/login` - cookie based session login
//! - `GET /api/v2/torrents/info` - torrent list
//! - `GET /api/v2/app/preferences` - application preferences
//! - `GET /api/v2/sync/maindata` - server state
//! - `GET /api/v2/app/version` - application version
//!
//! Any failure is reported as an `UpstreamError` and fails the current poll.

/// Error types for upstream reads.
pub mod errors;

/// Implementation blocks for the client and records.
pub mod impls;

/// Web API records and the HTTP client structure.
pub mod structs;

/// The upstream API trait.
pub mod traits;
