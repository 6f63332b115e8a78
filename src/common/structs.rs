//! Common data structures.

/// Plain message error type.
pub mod custom_error;
