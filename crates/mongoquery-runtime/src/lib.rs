//! mongoquery runtime - evaluation engine for query documents
//!
//! This crate decides whether a record matches a query document. It holds the
//! recursive matcher, the operator registry, the regex-literal parser with its
//! compiled-pattern cache, and the `$expr` sub-evaluator.

pub mod engine;
pub mod error;
pub mod options;
pub mod pattern;

// Re-export main types
pub use engine::{ExprOperator, Matcher, OperatorCategory, QueryOperator};
pub use error::{MatchError, Result};
pub use options::MatcherOptions;
pub use pattern::{PatternCache, PatternFlags, RegexLiteral};
