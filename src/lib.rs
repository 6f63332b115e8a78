//! # qBittorrent Exporter
//!
//! A Prometheus exporter for the qBittorrent Web API.
//!
//! ## Overview
//!
//! Every scrape of the metrics endpoint goes through a TTL cache. On a miss the
//! collector issues four concurrent reads against qBittorrent (torrent list,
//! preferences, main data, version), classifies each torrent's tracker into a
//! configured category and folds everything into one `MetricSnapshot`, which
//! is rendered in the Prometheus text format.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use qbittorrent_exporter::cache::structs::metrics_cache::MetricsCache;
//! use qbittorrent_exporter::collector::structs::collector::Collector;
//! use qbittorrent_exporter::config::structs::configuration::Configuration;
//! use qbittorrent_exporter::qbittorrent::structs::qbittorrent_client::QbittorrentClient;
//! use qbittorrent_exporter::tracker_mapper::structs::tracker_mapper::TrackerMapper;
//!
//! let config = Configuration::load_from_file(None, false)?;
//! let client = Arc::new(QbittorrentClient::new(&config.qbittorrent)?);
//! let mapper = Arc::new(TrackerMapper::new(config.tracker_mappings()));
//! let collector = Arc::new(Collector::from_config(client, mapper, &config));
//! let cache = MetricsCache::from_config(collector, &config.cache);
//! println!("{}", cache.get_snapshot().await?.render());
//! ```
//!
//! ## Modules
//!
//! - [`cache`] - TTL gate with single-flight refresh
//! - [`collector`] - Concurrent upstream reads and snapshot building
//! - [`common`] - Logging setup and shared error type
//! - [`config`] - TOML configuration with environment overrides
//! - [`http`] - actix-web scrape endpoint
//! - [`metrics`] - Metric families and text exposition
//! - [`qbittorrent`] - Web API client and response records
//! - [`structs`] - CLI arguments
//! - [`tracker_mapper`] - Tracker endpoint classification

/// Snapshot cache in front of the collector.
pub mod cache;

/// Metric collection.
///
/// Runs the four upstream reads of a poll and builds the snapshot in a single
/// pass over the torrent list.
pub mod collector;

/// Common utilities and shared functionality.
pub mod common;

/// Configuration management module.
///
/// Loads `config.toml`, applies environment overrides and validates the result.
pub mod config;

/// Prometheus scrape endpoint.
pub mod http;

/// Metric families and the Prometheus text format.
pub mod metrics;

/// qBittorrent Web API client.
pub mod qbittorrent;

/// Command-line interface structures.
pub mod structs;

/// Tracker endpoint classification.
///
/// Maps announce URLs to configured category labels through exact, pattern and
/// fallback lookups.
pub mod tracker_mapper;
