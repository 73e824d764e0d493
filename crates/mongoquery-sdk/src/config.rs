//! Configuration types for Query

use std::path::Path;

use mongoquery_runtime::MatcherOptions;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SdkError};

/// Query configuration
///
/// ```yaml
/// regex_cache: true
/// regex_size_limit: 1048576
/// trace_matches: false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Matcher options (regex caching and limits)
    #[serde(flatten)]
    pub matcher: MatcherOptions,

    /// Emit a debug event with the result of every match
    pub trace_matches: bool,
}

impl QueryConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Parse a configuration from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a configuration file, picking the format from its extension
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(SdkError::ConfigError(format!(
                "unsupported config file extension: {}",
                path.display()
            ))),
        }
    }

    /// Enable or disable the compiled-pattern cache
    pub fn with_regex_cache(mut self, enable: bool) -> Self {
        self.matcher.regex_cache = enable;
        self
    }

    /// Set the compiled-size limit for regex patterns
    pub fn with_regex_size_limit(mut self, limit: usize) -> Self {
        self.matcher.regex_size_limit = limit;
        self
    }

    /// Enable per-match debug events
    pub fn with_trace_matches(mut self, enable: bool) -> Self {
        self.trace_matches = enable;
        self
    }
}
