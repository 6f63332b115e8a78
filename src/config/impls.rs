//! Implementation blocks for configuration types.

/// Loading, saving, overriding and validating the root configuration.
pub mod configuration;

/// Display and Error implementations for `ConfigurationError`.
pub mod configuration_error;

/// Defaults for the qBittorrent section.
pub mod qbittorrent_config;

/// Defaults for the server section.
pub mod server_config;

/// Defaults and helpers for the cache section.
pub mod cache_config;

/// Defaults for the metrics section.
pub mod metrics_config;

/// Defaults for the performance section.
pub mod performance_config;

/// Defaults for the Sentry section.
pub mod sentry_config;
