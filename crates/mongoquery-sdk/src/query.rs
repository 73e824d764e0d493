//! Compiled query facade

use mongoquery_core::Value;
use mongoquery_runtime::Matcher;

use crate::config::QueryConfig;
use crate::error::Result;

/// A query document bound to a matcher.
///
/// Cheap to evaluate repeatedly; `$regex` patterns are compiled once and
/// reused across records when the pattern cache is enabled.
#[derive(Debug)]
pub struct Query {
    definition: Value,
    matcher: Matcher,
    trace_matches: bool,
}

impl Query {
    /// Create a query with the default configuration
    pub fn new(definition: impl Into<Value>) -> Self {
        Self::with_config(definition, QueryConfig::default())
    }

    /// Create a query with an explicit configuration
    pub fn with_config(definition: impl Into<Value>, config: QueryConfig) -> Self {
        Self {
            definition: definition.into(),
            matcher: Matcher::new(config.matcher),
            trace_matches: config.trace_matches,
        }
    }

    /// Parse a query document from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let definition: Value = serde_json::from_str(text)?;
        Ok(Self::new(definition))
    }

    /// Parse a query document from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let definition: Value = serde_yaml::from_str(text)?;
        Ok(Self::new(definition))
    }

    /// The query document
    pub fn definition(&self) -> &Value {
        &self.definition
    }

    /// Underlying matcher
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Decide whether `record` matches this query
    pub fn matches(&self, record: &Value) -> Result<bool> {
        let matched = self.matcher.matches(&self.definition, record)?;
        if self.trace_matches {
            tracing::debug!(query = %self.definition, %record, matched, "query evaluated");
        }
        Ok(matched)
    }

    /// Keep the records that match, in input order.
    ///
    /// Stops at the first evaluation error.
    pub fn filter<'a, I>(&self, records: I) -> Result<Vec<&'a Value>>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut kept = Vec::new();
        let mut seen = 0usize;
        for record in records {
            seen += 1;
            if self.matches(record)? {
                kept.push(record);
            }
        }
        tracing::debug!(seen, kept = kept.len(), "filtered records");
        Ok(kept)
    }
}
