//! mongoquery core - value model and field-path resolution
//!
//! This crate provides the fundamental types used across the mongoquery workspace:
//! - `Value`, the record/query node shape (with a distinct `Undefined` marker)
//! - Dotted field-path resolution with implicit array projection
//! - The bson alias table used by `$type`
//! - Error types

pub mod error;
pub mod path;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, PathError};
pub use path::{extract, path_exists, try_extract};
pub use types::{BsonType, RegexValue, TypeSelector, Value};
