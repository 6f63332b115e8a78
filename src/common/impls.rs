//! Implementation blocks for common types.

/// `CustomError` constructors and trait implementations.
pub mod custom_error;
