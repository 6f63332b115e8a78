//! Upstream API trait definitions.

/// The four reads a poll needs.
pub mod qbittorrent_api;
