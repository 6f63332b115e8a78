//! Implementation blocks for the Web API client and records.

/// Login, request and decoding logic.
pub mod qbittorrent_client;

/// Server state helpers.
pub mod server_state;
