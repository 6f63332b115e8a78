use std::collections::HashMap;
use crate::tracker_mapper::structs::mapping_entry::MappingEntry;

/// Immutable tracker mapping table, built once at startup.
///
/// Entries keep the order of the `[trackers]` table. Regex patterns are
/// compiled when the mapper is built, never per classification.
#[derive(Debug, Clone, Default)]
pub struct TrackerMapper {
    pub(crate) entries: Vec<MappingEntry>,
    pub(crate) exact: HashMap<String, usize>,
    pub(crate) fallback: Option<usize>,
}
