use crate::tracker_mapper::enums::pattern_matcher::PatternMatcher;

#[derive(Debug, Clone)]
pub struct MappingEntry {
    pub pattern: String,
    pub label: String,
    pub(crate) matcher: PatternMatcher,
}
