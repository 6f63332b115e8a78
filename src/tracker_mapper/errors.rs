use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostParseError {
    #[error("No host found in tracker endpoint: {0}")]
    EmptyHost(String),
}

#[derive(Error, Debug)]
#[error("Invalid tracker pattern '{pattern}': {source}")]
pub struct PatternCompileError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}
