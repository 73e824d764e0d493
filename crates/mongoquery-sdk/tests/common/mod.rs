//! Common test utilities for SDK integration tests

#![allow(dead_code)]

use mongoquery_sdk::{Query, Result, Value};

/// Build a record from a JSON literal
pub fn record(value: serde_json::Value) -> Value {
    Value::from(value)
}

/// Evaluate `query` against `data` with a default-configured query
pub fn eval(query: serde_json::Value, data: serde_json::Value) -> Result<bool> {
    Query::new(query).matches(&record(data))
}

/// Evaluate and unwrap; for queries that are known to be well-formed
pub fn check(query: serde_json::Value, data: serde_json::Value) -> bool {
    eval(query, data).expect("query evaluation failed")
}

/// A small heterogeneous collection used by the property tests
pub fn sample_records() -> Vec<serde_json::Value> {
    vec![
        serde_json::json!({}),
        serde_json::json!({"a": 1}),
        serde_json::json!({"a": 5, "b": 3}),
        serde_json::json!({"a": "5", "b": null}),
        serde_json::json!({"a": [1, 2, 3], "b": {"c": 2}}),
        serde_json::json!({"a": null}),
        serde_json::json!({"a": 2.5, "b": [{"c": 1}, {"c": 9}]}),
    ]
}
