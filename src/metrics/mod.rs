//! Metric snapshot and exposition module.
//!
//! A `MetricSnapshot` is the complete, immutable result of one poll: an
//! ordered list of metric families plus the per-state and per-tracker torrent
//! counts. Snapshots are rendered in the Prometheus text exposition format:
//!
//! ```text
//! # HELP qbittorrent_torrent_states Number of torrents in each state
//! # TYPE qbittorrent_torrent_states gauge
//! qbittorrent_torrent_states{state="uploading"} 3
//! ```
//!
//! Families without points are left out of the rendered output.

/// Metric type enumeration.
pub mod enums;

/// Implementation blocks for rendering and lookups.
pub mod impls;

/// Snapshot, family and point structures.
pub mod structs;
