//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// qBittorrent Web API connection settings.
pub mod qbittorrent_config;

/// Scrape endpoint server settings.
pub mod server_config;

/// Scrape cache settings.
pub mod cache_config;

/// Metric selection settings.
pub mod metrics_config;

/// Upstream polling behaviour.
pub mod performance_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
