//! Matcher error types

use thiserror::Error;

/// Error raised while matching a record against a query
#[derive(Error, Debug)]
pub enum MatchError {
    /// Caller-correctable misuse: bad operator name, wrong argument shape or type
    #[error("Query error: {0}")]
    Query(String),

    /// A regex pattern that failed to compile
    #[error("Query error: {pattern:?} failed to compile: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Operator recognised but intentionally unsupported
    #[error("Operator {0} is not implemented")]
    NotImplemented(String),
}

impl MatchError {
    pub(crate) fn query(message: impl Into<String>) -> Self {
        MatchError::Query(message.into())
    }

    /// True for every caller-correctable error, pattern failures included
    pub fn is_query_error(&self) -> bool {
        matches!(self, MatchError::Query(_) | MatchError::InvalidPattern { .. })
    }

    pub fn is_not_implemented(&self) -> bool {
        matches!(self, MatchError::NotImplemented(_))
    }
}

/// Result type for matcher operations
pub type Result<T> = std::result::Result<T, MatchError>;
