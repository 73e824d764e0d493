//! `$expr` example
//!
//! This example demonstrates:
//! - Comparing two fields of the same record
//! - Computing a value with `$concat`

use mongoquery_sdk::{Query, Value};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mongoquery_runtime=trace".into()),
        )
        .init();

    println!("=== $expr Example ===\n");

    let budgets = [
        json!({"category": "food", "budget": 400, "spent": 450}),
        json!({"category": "drinks", "budget": 100, "spent": 150}),
        json!({"category": "clothes", "budget": 100, "spent": 50}),
        json!({"category": "misc", "budget": 500, "spent": 300}),
    ];

    let over_budget = Query::new(json!({"$expr": {"$gt": ["$spent", "$budget"]}}));
    println!("Over budget:");
    for record in &budgets {
        let record = Value::from(record.clone());
        if over_budget.matches(&record)? {
            println!("  {}", record);
        }
    }

    let people = [
        json!({"first": "Ada", "last": "Lovelace", "full": "Ada Lovelace"}),
        json!({"first": "Alan", "last": "Turing", "full": "A. Turing"}),
    ];

    let consistent = Query::new(json!({
        "$expr": {"$eq": ["$full", {"$concat": ["$first", " ", "$last"]}]}
    }));
    println!("\nFull name consistent with parts:");
    for record in &people {
        let record = Value::from(record.clone());
        println!("  {} -> {}", record, consistent.matches(&record)?);
    }

    Ok(())
}
