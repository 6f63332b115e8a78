//! Implementation blocks for tracker classification.

/// Host extraction and tiered resolution.
pub mod tracker_mapper;

/// Mapping entry construction.
pub mod mapping_entry;

/// Regex detection, compilation and matching.
pub mod pattern_matcher;
