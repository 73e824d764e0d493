//! Type system for mongoquery
//!
//! This module contains the runtime type system including:
//! - Value types
//! - The bson alias table used by `$type`

pub mod bson;
pub mod value;

pub use bson::{BsonType, TypeSelector};
pub use value::{RegexValue, Value, REGEX_FLAGS};
