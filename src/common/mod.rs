//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used across
//! all other modules of the exporter.
//!
//! # Utilities
//!
//! - Logging setup
//! - Log level parsing
//!
//! # Data Structures
//!
//! - `CustomError` - Plain message error used during bootstrap
//!
//! # Example
//!
//! ```rust,ignore
//! use qbittorrent_exporter::common::common::setup_logging;
//!
//! setup_logging(&config)?;
//! ```

/// Common data structures (errors).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
