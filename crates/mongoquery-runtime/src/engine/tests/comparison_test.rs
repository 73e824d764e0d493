//! Comparison operator tests

use super::{check, eval};
use serde_json::json;

#[test]
fn test_eq_and_ne() {
    assert!(check(json!({"a": {"$eq": 3}}), json!({"a": 3})));
    assert!(check(json!({"a": {"$eq": 3}}), json!({"a": 3.0})));
    assert!(!check(json!({"a": {"$eq": 3}}), json!({"a": "3"})));
    assert!(check(json!({"a": {"$ne": 3}}), json!({"a": 4})));
    assert!(!check(json!({"a": {"$ne": 3}}), json!({"a": 3})));
}

#[test]
fn test_large_int_against_float_is_exact() {
    let record = json!({"a": 9_007_199_254_740_993_i64});
    assert!(!check(json!({"a": {"$eq": 9_007_199_254_740_992.0}}), record.clone()));
    assert!(check(json!({"a": {"$ne": 9_007_199_254_740_992.0}}), record.clone()));
    assert!(check(json!({"a": {"$gt": 9_007_199_254_740_992.0}}), record.clone()));
    assert!(!check(json!({"a": {"$in": [9_007_199_254_740_992.0]}}), record));

    let max = json!({"a": i64::MAX});
    assert!(check(json!({"a": {"$lt": 9.223372036854776e18}}), max.clone()));
    assert!(!check(json!({"a": {"$gte": 9.223372036854776e18}}), max));
}

#[test]
fn test_ne_matches_missing_field() {
    assert!(check(json!({"a": {"$ne": null}}), json!({})));
    assert!(!check(json!({"a": {"$eq": null}}), json!({})));
}

#[test]
fn test_eq_does_not_look_inside_arrays() {
    assert!(!check(json!({"a": {"$eq": 1}}), json!({"a": [1, 2]})));
    assert!(check(json!({"a": {"$eq": [1, 2]}}), json!({"a": [1, 2]})));
}

#[test]
fn test_ordering_numbers() {
    let record = json!({"amount": 150});
    assert!(check(json!({"amount": {"$gt": 100}}), record.clone()));
    assert!(check(json!({"amount": {"$gte": 150}}), record.clone()));
    assert!(!check(json!({"amount": {"$lt": 150}}), record.clone()));
    assert!(check(json!({"amount": {"$lte": 150.0}}), record.clone()));
    assert!(check(json!({"amount": {"$gt": 99.5, "$lt": 200}}), record));
}

#[test]
fn test_ordering_strings() {
    assert!(check(json!({"name": {"$gt": "Alice"}}), json!({"name": "Bob"})));
    assert!(!check(json!({"name": {"$lt": "Alice"}}), json!({"name": "Bob"})));
}

#[test]
fn test_ordering_incomparable_is_false() {
    assert!(!check(json!({"a": {"$gt": 1}}), json!({"a": "2"})));
    assert!(!check(json!({"a": {"$lt": 1}}), json!({"a": "2"})));
    assert!(!check(json!({"a": {"$gte": 1}}), json!({"a": null})));
    assert!(!check(json!({"a": {"$lte": 1}}), json!({})));
    assert!(!check(json!({"a": {"$gt": {}}}), json!({"a": {}})));
}

#[test]
fn test_ordering_arrays() {
    assert!(check(json!({"v": {"$gt": [1, 2]}}), json!({"v": [1, 3]})));
    assert!(check(json!({"v": {"$lt": [1, 2]}}), json!({"v": [1]})));
}

#[test]
fn test_in_scalar_entry() {
    assert!(check(json!({"status": {"$in": ["high", "critical"]}}), json!({"status": "high"})));
    assert!(!check(json!({"status": {"$in": ["high", "critical"]}}), json!({"status": "low"})));
    assert!(!check(json!({"status": {"$in": []}}), json!({"status": "low"})));
}

#[test]
fn test_in_array_entry() {
    assert!(check(json!({"tags": {"$in": ["x", "b"]}}), json!({"tags": ["a", "b"]})));
    assert!(!check(json!({"tags": {"$in": ["x", "y"]}}), json!({"tags": ["a", "b"]})));
}

#[test]
fn test_in_requires_array() {
    let err = eval(json!({"a": {"$in": "abc"}}), json!({"a": "a"})).unwrap_err();
    assert!(err.is_query_error());
    assert!(eval(json!({"a": {"$nin": 5}}), json!({"a": 5})).is_err());
}

#[test]
fn test_nin_complements_in() {
    let cases = [
        (json!([1, 2]), json!({"a": 1})),
        (json!([1, 2]), json!({"a": 3})),
        (json!([1, 2]), json!({"a": [2, 5]})),
        (json!([null]), json!({})),
    ];
    for (list, record) in cases {
        let in_result = check(json!({"a": {"$in": list.clone()}}), record.clone());
        let nin_result = check(json!({"a": {"$nin": list}}), record);
        assert_eq!(in_result, !nin_result);
    }
}
