//! Runtime tests through the public matcher API

use mongoquery_core::Value;
use mongoquery_runtime::{Matcher, MatcherOptions, QueryOperator};
use serde_json::json;

fn document(value: serde_json::Value) -> Value {
    Value::from(value)
}

// =============================================================================
// Realistic queries
// =============================================================================

fn inventory() -> Vec<Value> {
    vec![
        document(json!({"item": "journal", "qty": 25, "tags": ["blank", "red"], "dim": {"h": 14, "w": 21}})),
        document(json!({"item": "notebook", "qty": 50, "tags": ["red", "blank"], "dim": {"h": 8.5, "w": 11}})),
        document(json!({"item": "paper", "qty": 100, "tags": ["red", "blank", "plain"], "dim": {"h": 8.5, "w": 11}})),
        document(json!({"item": "planner", "qty": 75, "tags": ["blank", "red"], "dim": {"h": 22.85, "w": 30}})),
        document(json!({"item": "postcard", "qty": 45, "tags": ["blue"], "dim": {"h": 10, "w": 15.25}})),
    ]
}

fn matching_items(query: serde_json::Value) -> Vec<String> {
    let matcher = Matcher::default();
    let query = document(query);
    inventory()
        .iter()
        .filter(|record| matcher.matches(&query, record).unwrap())
        .map(|record| record.as_object().unwrap()["item"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_range_and_nested_field() {
    let items = matching_items(json!({"qty": {"$gte": 45, "$lt": 80}, "dim.h": {"$lt": 15}}));
    assert_eq!(items, vec!["notebook", "postcard"]);
}

#[test]
fn test_or_with_regex() {
    let items = matching_items(json!({"$or": [{"qty": {"$lt": 30}}, {"item": {"$regex": "^p"}}]}));
    assert_eq!(items, vec!["journal", "paper", "planner", "postcard"]);
}

#[test]
fn test_array_element_and_size() {
    let items = matching_items(json!({"tags": "plain"}));
    assert_eq!(items, vec!["paper"]);

    let items = matching_items(json!({"tags": {"$size": 2, "$all": ["red", "blank"]}}));
    assert_eq!(items, vec!["journal", "notebook", "planner"]);
}

#[test]
fn test_expr_over_nested_fields() {
    let items = matching_items(json!({"$expr": {"$gt": ["$dim.w", "$qty"]}}));
    assert!(items.is_empty());

    let items = matching_items(json!({"$expr": {"$lt": ["$dim.h", "$dim.w"]}}));
    assert_eq!(items.len(), 5);
}

// =============================================================================
// Registry and options
// =============================================================================

#[test]
fn test_operator_lookup_from_key() {
    assert_eq!(QueryOperator::from_key("$nin").unwrap(), QueryOperator::Nin);
    assert!(QueryOperator::from_key("$bogus").is_err());
}

#[test]
fn test_unregistered_operator_fails() {
    let err = Matcher::default()
        .matches(&document(json!({"$bogus": 1})), &document(json!({})))
        .unwrap_err();
    assert!(err.is_query_error());
}

#[test]
fn test_regex_cache_can_be_disabled() {
    let matcher = Matcher::new(MatcherOptions::default().with_regex_cache(false));
    let query = document(json!({"item": {"$regex": "/^P/i"}}));
    let hits = inventory()
        .iter()
        .filter(|record| matcher.matches(&query, record).unwrap())
        .count();
    assert_eq!(hits, 3);
    assert!(matcher.patterns().is_empty());
}

#[test]
fn test_matcher_shared_across_threads() {
    let matcher = Matcher::default();
    let query = document(json!({"item": {"$regex": "^p"}, "qty": {"$gt": 50}}));
    let records = inventory();

    let counts: Vec<usize> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    records
                        .iter()
                        .filter(|record| matcher.matches(&query, record).unwrap())
                        .count()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(counts.iter().all(|count| *count == 2));
    assert_eq!(matcher.patterns().len(), 1);
}
