//! mongoquery SDK
//!
//! High-level API for matching records against MongoDB-style query documents.
//!
//! ```rust
//! use mongoquery_sdk::{Query, Value};
//! use serde_json::json;
//!
//! let query = Query::new(json!({"qty": {"$gt": 20}, "tags": "red"}));
//! let record = Value::from(json!({"qty": 25, "tags": ["blank", "red"]}));
//! assert!(query.matches(&record).unwrap());
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod query;

// Re-export main types
pub use builder::QueryBuilder;
pub use config::QueryConfig;
pub use error::{Result, SdkError};
pub use query::Query;

// Re-export commonly used types from dependencies
pub use mongoquery_core::{RegexValue, Value};
pub use mongoquery_runtime::{MatchError, MatcherOptions};
