//! Configuration enumerations.

/// Errors raised while loading or validating the configuration.
pub mod configuration_error;
