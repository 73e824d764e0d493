//! Simple query example
//!
//! This example demonstrates:
//! - Building a Query from a JSON document
//! - Matching individual records
//! - Handling an unsupported operator

use mongoquery_sdk::{Query, Value};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mongoquery_sdk=debug".into()),
        )
        .init();

    println!("=== Simple Query Example ===\n");

    let query = Query::from_json_str(
        r#"{
            "status": "active",
            "age": {"$gte": 18, "$lt": 65},
            "tags": {"$in": ["admin", "staff"]}
        }"#,
    )?;
    println!("Query: {}\n", query.definition());

    let records = [
        json!({"name": "ada", "status": "active", "age": 36, "tags": ["admin"]}),
        json!({"name": "bob", "status": "active", "age": 70, "tags": ["staff"]}),
        json!({"name": "cyd", "status": "disabled", "age": 29, "tags": ["staff"]}),
        json!({"name": "dee", "status": "active", "age": 41, "tags": "staff"}),
    ];

    for record in records {
        let record = Value::from(record);
        let matched = query.matches(&record)?;
        println!("  {} -> {}", record, if matched { "match" } else { "no match" });
    }

    // $where is recognised but not supported
    let unsupported = Query::new(json!({"$where": "this.age > 18"}));
    if let Err(err) = unsupported.matches(&Value::from(json!({"age": 20}))) {
        println!("\nUnsupported operator: {}", err);
    }

    Ok(())
}
