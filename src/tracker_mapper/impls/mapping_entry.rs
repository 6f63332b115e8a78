use log::warn;
use crate::tracker_mapper::enums::pattern_matcher::PatternMatcher;
use crate::tracker_mapper::structs::mapping_entry::MappingEntry;

impl MappingEntry {
    /// Builds an entry, degrading an invalid regex to substring matching.
    pub fn new(pattern: &str, label: &str) -> MappingEntry {
        let matcher = match PatternMatcher::compile(pattern) {
            Ok(matcher) => matcher,
            Err(error) => {
                warn!("[TRACKERS] {error}, using substring matching instead");
                PatternMatcher::substring(pattern)
            }
        };
        MappingEntry {
            pattern: pattern.to_string(),
            label: label.to_string(),
            matcher,
        }
    }

    pub fn matches(&self, host: &str) -> bool {
        self.matcher.matches(host)
    }

    pub fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }
}
