//! Builder pattern for Query

use std::path::PathBuf;

use mongoquery_core::Value;

use crate::config::QueryConfig;
use crate::error::{Result, SdkError};
use crate::query::Query;

/// Where the builder takes its definition from
#[derive(Debug, Clone)]
enum Definition {
    Value(Value),
    Json(String),
    Yaml(String),
}

/// Builder for Query
///
/// # Example
///
/// ```rust
/// use mongoquery_sdk::QueryBuilder;
///
/// let query = QueryBuilder::new()
///     .definition_yaml("age: { $gte: 18 }")
///     .regex_cache(false)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct QueryBuilder {
    definition: Option<Definition>,
    config: QueryConfig,
    config_file: Option<PathBuf>,
}

impl QueryBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an already-built query document
    pub fn definition(mut self, definition: impl Into<Value>) -> Self {
        self.definition = Some(Definition::Value(definition.into()));
        self
    }

    /// Parse the query document from JSON text at build time
    pub fn definition_json(mut self, text: impl Into<String>) -> Self {
        self.definition = Some(Definition::Json(text.into()));
        self
    }

    /// Parse the query document from YAML text at build time
    pub fn definition_yaml(mut self, text: impl Into<String>) -> Self {
        self.definition = Some(Definition::Yaml(text.into()));
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a file at build time.
    ///
    /// Overrides anything set through [`QueryBuilder::config`].
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Enable or disable the regex cache
    pub fn regex_cache(mut self, enable: bool) -> Self {
        self.config = self.config.with_regex_cache(enable);
        self
    }

    /// Enable per-match debug events
    pub fn trace_matches(mut self, enable: bool) -> Self {
        self.config = self.config.with_trace_matches(enable);
        self
    }

    /// Build the query
    pub fn build(self) -> Result<Query> {
        let config = match &self.config_file {
            Some(path) => QueryConfig::from_file(path)?,
            None => self.config,
        };

        let definition = match self.definition.ok_or(SdkError::MissingDefinition)? {
            Definition::Value(value) => value,
            Definition::Json(text) => serde_json::from_str(&text)?,
            Definition::Yaml(text) => serde_yaml::from_str(&text)?,
        };

        tracing::debug!(query = %definition, "built query");
        Ok(Query::with_config(definition, config))
    }
}
