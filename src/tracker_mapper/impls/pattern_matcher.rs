use regex::RegexBuilder;
use crate::tracker_mapper::enums::pattern_matcher::PatternMatcher;
use crate::tracker_mapper::errors::PatternCompileError;

const REGEX_CHARACTERS: [char; 12] = ['\\', '^', '$', '[', ']', '(', ')', '{', '}', '|', '+', '?'];

impl PatternMatcher {
    /// A pattern is a regex when it contains `.*` or any other regex metacharacter.
    pub fn is_regex(pattern: &str) -> bool {
        pattern.contains(".*") || pattern.contains(REGEX_CHARACTERS)
    }

    pub fn substring(pattern: &str) -> PatternMatcher {
        PatternMatcher::Substring(pattern.to_lowercase())
    }

    pub fn compile(pattern: &str) -> Result<PatternMatcher, PatternCompileError> {
        if !Self::is_regex(pattern) {
            return Ok(Self::substring(pattern));
        }
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map(PatternMatcher::Regex)
            .map_err(|source| PatternCompileError { pattern: pattern.to_string(), source })
    }

    pub fn matches(&self, host: &str) -> bool {
        match self {
            PatternMatcher::Regex(regex) => regex.is_match(host),
            PatternMatcher::Substring(needle) => host.to_lowercase().contains(needle.as_str()),
        }
    }

    pub fn is_substring(&self) -> bool {
        matches!(self, PatternMatcher::Substring(_))
    }
}
