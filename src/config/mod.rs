//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the exporter
//! configuration from TOML files, followed by environment variable overrides.
//!
//! # Configuration Structure
//!
//! The main configuration file (`config.toml`) contains sections for:
//! - **qbittorrent**: Web API base URL, credentials and request timeout
//! - **server**: Scrape endpoint bind address, path and worker settings
//! - **cache**: Freshness window of the scrape cache and single-flight toggle
//! - **metrics**: Toggle for the high-cardinality torrent info metric
//! - **performance**: Concurrent or sequential upstream reads
//! - **trackers**: Ordered `pattern = "label"` tracker mapping table
//! - **sentry_config**: Error reporting configuration
//!
//! # Resolution Order
//!
//! The file path comes from `--config`, then `CONFIG_PATH`, then `config.toml`.
//! A missing file falls back to built-in defaults.
//!
//! # Example
//!
//! ```rust,ignore
//! use qbittorrent_exporter::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file(None, false)?;
//! let mappings = config.tracker_mappings();
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
