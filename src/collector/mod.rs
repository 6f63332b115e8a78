//! Metric collection module.
//!
//! The `Collector` runs one poll: it issues the four upstream reads (torrent
//! list, preferences, main data, version), waits for all of them, and folds
//! the results into a `MetricSnapshot` in a single pass over the torrents,
//! classifying every torrent's tracker on the way.
//!
//! A poll either produces a complete snapshot or fails with the first
//! `UpstreamError`; partial snapshots are never built.
//!
//! # Example
//!
//! ```rust,ignore
//! use qbittorrent_exporter::collector::structs::collector::Collector;
//!
//! let collector = Collector::from_config(api, tracker_mapper, &config);
//! let snapshot = collector.collect().await?;
//! println!("{}", snapshot.render());
//! ```

/// Implementation blocks for polling and snapshot building.
pub mod impls;

/// Collector structure.
pub mod structs;
