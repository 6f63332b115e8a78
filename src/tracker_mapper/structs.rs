//! Tracker mapper structures.

/// The ordered, precompiled mapping table.
pub mod tracker_mapper;

/// A single `pattern = "label"` entry.
pub mod mapping_entry;
