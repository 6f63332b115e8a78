use regex::Regex;

#[derive(Debug, Clone)]
pub enum PatternMatcher {
    /// Precompiled case-insensitive regex.
    Regex(Regex),
    /// Lowercased needle for case-insensitive containment.
    Substring(String),
}
