//! Tracker classification module.
//!
//! Resolves raw tracker announce endpoints (`https://host/announce`,
//! `udp://host:port/announce`, bare `host:port/path`) to human-friendly
//! category labels using the ordered `[trackers]` mapping table.
//!
//! # Resolution Order
//!
//! 1. **Exact**: a pattern equal to the extracted host (case-sensitive)
//! 2. **Pattern**: table order, regex when the pattern carries regex
//!    metacharacters, case-insensitive substring otherwise
//! 3. **Fallback**: the label of the reserved `other` pattern
//! 4. **Default**: the extracted host itself
//!
//! Classification never fails: blank input maps to `unknown`, and an
//! endpoint whose host cannot be extracted is returned unchanged.
//!
//! # Example
//!
//! ```rust,ignore
//! use qbittorrent_exporter::tracker_mapper::structs::tracker_mapper::TrackerMapper;
//!
//! let mapper = TrackerMapper::new(vec![("beyond-hd".to_string(), "BHD".to_string())]);
//! assert_eq!(mapper.classify("https://tracker.beyond-hd.me/announce"), "BHD");
//! ```

/// Matcher enumeration (regex or substring).
pub mod enums;

/// Error types for host extraction and pattern compilation.
pub mod errors;

/// Implementation blocks for the mapper and its entries.
pub mod impls;

/// Mapper and mapping entry structures.
pub mod structs;
