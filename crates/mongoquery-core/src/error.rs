//! Error types for mongoquery core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Raised while following a field path.
///
/// Only index lookups can fail; missing keys and shape mismatches resolve to
/// `Value::Undefined` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("Index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: i64, len: usize },
}

pub type Result<T> = std::result::Result<T, CoreError>;
