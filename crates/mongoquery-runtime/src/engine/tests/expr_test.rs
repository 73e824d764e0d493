//! `$expr` tests

use super::{check, eval};
use serde_json::json;

#[test]
fn test_expr_field_comparison() {
    assert!(check(json!({"$expr": {"$gt": ["$a", "$b"]}}), json!({"a": 5, "b": 3})));
    assert!(!check(json!({"$expr": {"$gt": ["$a", "$b"]}}), json!({"a": 3, "b": 5})));
    assert!(check(json!({"$expr": {"$lte": ["$a", 3]}}), json!({"a": 3})));
}

#[test]
fn test_expr_operand_order() {
    let record = json!({"spent": 120, "budget": 100});
    assert!(check(json!({"$expr": {"$gt": ["$spent", "$budget"]}}), record.clone()));
    assert!(check(json!({"$expr": {"$lt": ["$budget", "$spent"]}}), record));
}

#[test]
fn test_expr_in() {
    let record = json!({"role": "admin", "allowed": ["admin", "owner"]});
    assert!(check(json!({"$expr": {"$in": ["$role", "$allowed"]}}), record.clone()));
    assert!(!check(json!({"$expr": {"$nin": ["$role", "$allowed"]}}), record));
}

#[test]
fn test_expr_concat_comparison() {
    let record = json!({"first": "Ada", "last": "Lovelace", "full": "Ada Lovelace"});
    let query = json!({"$expr": {"$eq": [{"$concat": ["$first", " ", "$last"]}, "$full"]}});
    assert!(check(query, record));
}

#[test]
fn test_expr_top_level_concat_is_truthy() {
    assert!(check(json!({"$expr": {"$concat": ["a", "b"]}}), json!({})));
    assert!(!check(json!({"$expr": {"$concat": []}}), json!({})));
}

#[test]
fn test_expr_conjunction() {
    let query = json!({"$expr": {"$gt": ["$a", 1], "$lt": ["$a", 10]}});
    assert!(check(query.clone(), json!({"a": 5})));
    assert!(!check(query, json!({"a": 50})));
}

#[test]
fn test_expr_missing_field_is_incomparable() {
    assert!(!check(json!({"$expr": {"$gt": ["$missing", 1]}}), json!({})));
    assert!(check(json!({"$expr": {"$ne": ["$missing", 1]}}), json!({})));
}

#[test]
fn test_expr_errors() {
    let unsupported = eval(json!({"$expr": {"$add": [1, 2]}}), json!({})).unwrap_err();
    assert!(unsupported.is_query_error());
    assert!(unsupported.to_string().contains("$add"));

    assert!(eval(json!({"$expr": {"$gt": ["$a"]}}), json!({"a": 1})).is_err());
    assert!(eval(json!({"$expr": {"$gt": "$a"}}), json!({"a": 1})).is_err());
    assert!(eval(json!({"$expr": [1]}), json!({})).is_err());
    assert!(eval(json!({"$expr": {"$concat": ["$n"]}}), json!({"n": 1})).is_err());
}
