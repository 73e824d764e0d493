//! Filtering records example
//!
//! This example demonstrates:
//! - Defining a query in YAML with QueryBuilder
//! - Loading matcher configuration
//! - Filtering a collection and projecting a nested path

use mongoquery_core::{extract, path::split_path};
use mongoquery_sdk::{QueryBuilder, QueryConfig, Value};
use serde_json::json;

const QUERY: &str = r#"
$or:
  - dim.h: { $lt: 10 }
  - tags: { $all: [red, plain] }
item: { $regex: "/^[np]/i" }
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Filter Records Example ===\n");

    let config = QueryConfig::from_yaml_str("regex_cache: true\ntrace_matches: true\n")?;
    let query = QueryBuilder::new()
        .definition_yaml(QUERY)
        .config(config)
        .build()?;

    let inventory: Vec<Value> = serde_json::from_value(json!([
        {"item": "journal", "qty": 25, "tags": ["blank", "red"], "dim": {"h": 14, "w": 21}},
        {"item": "notebook", "qty": 50, "tags": ["red", "blank"], "dim": {"h": 8.5, "w": 11}},
        {"item": "paper", "qty": 100, "tags": ["red", "blank", "plain"], "dim": {"h": 8.5, "w": 11}},
        {"item": "planner", "qty": 75, "tags": ["blank", "red"], "dim": {"h": 22.85, "w": 30}},
        {"item": "postcard", "qty": 45, "tags": ["blue"], "dim": {"h": 10, "w": 15.25}}
    ]))?;

    let kept = query.filter(&inventory)?;
    println!("Matched {} of {} records:", kept.len(), inventory.len());
    for record in &kept {
        println!("  {}", extract(record, &split_path("item")));
    }

    let collection = Value::Array(inventory.clone());
    let heights = extract(&collection, &split_path("dim.h"));
    println!("\nAll heights: {}", heights);
    println!("Cached patterns: {}", query.matcher().patterns().len());

    Ok(())
}
