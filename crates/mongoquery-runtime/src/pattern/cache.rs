//! Compiled pattern cache

use dashmap::DashMap;
use regex::{Regex, RegexBuilder};

use super::literal::PatternFlags;
use crate::error::{MatchError, Result};
use crate::options::MatcherOptions;

/// Compiles `$regex` patterns, keeping them for reuse when enabled.
///
/// Safe to share between threads evaluating different records.
#[derive(Debug)]
pub struct PatternCache {
    enabled: bool,
    size_limit: usize,
    compiled: DashMap<(String, PatternFlags), Regex>,
}

impl PatternCache {
    pub fn new(options: &MatcherOptions) -> Self {
        Self {
            enabled: options.regex_cache,
            size_limit: options.regex_size_limit,
            compiled: DashMap::new(),
        }
    }

    /// Compile `pattern` with `flags`, serving from the cache when possible
    pub fn compile(&self, pattern: &str, flags: PatternFlags) -> Result<Regex> {
        let key = (pattern.to_string(), flags);
        if self.enabled {
            if let Some(hit) = self.compiled.get(&key) {
                return Ok(hit.value().clone());
            }
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(flags.case_insensitive)
            .multi_line(flags.multi_line)
            .dot_matches_new_line(flags.dot_all)
            .ignore_whitespace(flags.extended)
            .size_limit(self.size_limit)
            .build()
            .map_err(|source| MatchError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        tracing::debug!(pattern, ?flags, "compiled regex pattern");

        if self.enabled {
            self.compiled.insert(key, regex.clone());
        }
        Ok(regex)
    }

    /// Number of cached patterns
    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }

    pub fn clear(&self) {
        self.compiled.clear();
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new(&MatcherOptions::default())
    }
}
