//! Matcher options

use serde::{Deserialize, Serialize};

/// Default compiled-size limit for regex patterns (10 MiB)
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Options controlling how a `Matcher` evaluates queries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherOptions {
    /// Keep compiled regex patterns for reuse across records
    pub regex_cache: bool,

    /// Compiled-size limit handed to the regex builder
    pub regex_size_limit: usize,
}

impl MatcherOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_regex_cache(mut self, enable: bool) -> Self {
        self.regex_cache = enable;
        self
    }

    pub fn with_regex_size_limit(mut self, limit: usize) -> Self {
        self.regex_size_limit = limit;
        self
    }
}

impl Default for MatcherOptions {
    fn default() -> Self {
        Self {
            regex_cache: true,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
        }
    }
}
