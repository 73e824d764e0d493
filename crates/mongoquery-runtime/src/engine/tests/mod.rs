//! Engine tests
//!
//! Operator behaviour exercised through the public matcher.

mod comparison_test;
mod expr_test;

use crate::engine::Matcher;
use crate::error::Result;
use mongoquery_core::Value;

/// Match a JSON-built query against a JSON-built record
pub(super) fn eval(query: serde_json::Value, record: serde_json::Value) -> Result<bool> {
    Matcher::default().matches(&Value::from(query), &Value::from(record))
}

pub(super) fn check(query: serde_json::Value, record: serde_json::Value) -> bool {
    eval(query, record).unwrap()
}
