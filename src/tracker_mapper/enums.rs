//! Tracker mapper enumerations.

/// How a mapping pattern is tested against a host.
pub mod pattern_matcher;
