//! `$expr` sub-evaluator
//!
//! Resolves `$field` references and nested expression operators to values,
//! then applies comparisons or computed operators over them.

use std::borrow::Cow;

use mongoquery_core::path::{extract, split_path};
use mongoquery_core::Value;

use super::matcher::Matcher;
use super::registry::{ExprOperator, QueryOperator};
use crate::error::{MatchError, Result};

/// `{"$expr": {"$op": [args...], ...}}`: conjunction over every operator key
pub(crate) fn expr(matcher: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    let Value::Object(operators) = condition else {
        return Err(MatchError::query(format!(
            "$expr requires a document of operators, got {}",
            condition
        )));
    };

    for (operator, args) in operators {
        if !process_expr_condition(matcher, operator, args, entry)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn process_expr_condition(matcher: &Matcher, operator: &str, args: &Value, entry: &Value) -> Result<bool> {
    let name = operator.strip_prefix('$').ok_or_else(|| {
        MatchError::query(format!("'{}' in $expr is not an operator", operator))
    })?;
    let Value::Array(items) = args else {
        return Err(MatchError::query(format!(
            "{} in $expr requires an array of arguments, got {}",
            operator, args
        )));
    };

    if let Some(comparison) = QueryOperator::from_name(name).filter(|op| op.is_comparison()) {
        let [lhs, rhs] = items.as_slice() else {
            return Err(MatchError::query(format!(
                "{} in $expr requires exactly two arguments, got {}",
                operator,
                items.len()
            )));
        };
        let lhs = resolve_expr(matcher, lhs, entry)?;
        let rhs = resolve_expr(matcher, rhs, entry)?;

        tracing::trace!(operator, %lhs, %rhs, "$expr comparison");
        // The first argument plays the entry, the second the condition
        return comparison.apply(matcher, &rhs, &lhs);
    }

    let computed = lookup_expr_operator(operator)?.evaluate(matcher, args, entry)?;
    Ok(computed.is_truthy())
}

/// Resolve an expression node to a value.
///
/// - A single-key `{"$op": arg}` mapping evaluates the expression operator.
/// - An array resolves element-wise.
/// - A string starting with `$` is a field reference into `entry`.
/// - Anything else is a literal.
pub(crate) fn resolve_expr<'a>(matcher: &Matcher, node: &'a Value, entry: &'a Value) -> Result<Cow<'a, Value>> {
    match node {
        Value::Object(map) => {
            let mut operators = map.iter();
            let (Some((operator, arg)), None) = (operators.next(), operators.next()) else {
                return Err(MatchError::query(format!(
                    "$expr sub-expression must hold exactly one operator, got {}",
                    node
                )));
            };
            let value = lookup_expr_operator(operator)?.evaluate(matcher, arg, entry)?;
            Ok(Cow::Owned(value))
        }
        Value::Array(items) => {
            let resolved = items
                .iter()
                .map(|item| resolve_expr(matcher, item, entry).map(Cow::into_owned))
                .collect::<Result<Vec<_>>>()?;
            Ok(Cow::Owned(Value::Array(resolved)))
        }
        Value::String(reference) if reference.starts_with('$') => {
            Ok(extract(entry, &split_path(&reference[1..])))
        }
        _ => Ok(Cow::Borrowed(node)),
    }
}

fn lookup_expr_operator(operator: &str) -> Result<ExprOperator> {
    operator
        .strip_prefix('$')
        .and_then(ExprOperator::from_name)
        .ok_or_else(|| MatchError::query(format!("'{}' operator in $expr isn't supported", operator)))
}

/// `$concat`: resolve every argument and join them; all must be strings
pub(crate) fn concat(matcher: &Matcher, args: &Value, entry: &Value) -> Result<Value> {
    let Value::Array(items) = args else {
        return Err(MatchError::query(format!(
            "$concat requires an array of arguments, got {}",
            args
        )));
    };

    let mut joined = String::new();
    for item in items {
        match resolve_expr(matcher, item, entry)?.as_ref() {
            Value::String(part) => joined.push_str(part),
            _ => return Err(MatchError::query("$concat with non-string references")),
        }
    }
    Ok(Value::String(joined))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_field_reference() {
        let matcher = Matcher::default();
        let entry = Value::from(json!({"a": {"b": 5}}));
        let node = Value::from("$a.b");
        assert_eq!(*resolve_expr(&matcher, &node, &entry).unwrap(), Value::Int(5));
    }

    #[test]
    fn test_resolve_literal_and_array() {
        let matcher = Matcher::default();
        let entry = Value::from(json!({"x": 1}));
        let node = Value::from(json!(["$x", 2, "plain"]));
        assert_eq!(
            *resolve_expr(&matcher, &node, &entry).unwrap(),
            Value::from(json!([1, 2, "plain"]))
        );
    }

    #[test]
    fn test_resolve_missing_reference_is_undefined() {
        let matcher = Matcher::default();
        let entry = Value::from(json!({}));
        let node = Value::from("$missing");
        assert!(resolve_expr(&matcher, &node, &entry).unwrap().is_undefined());
    }

    #[test]
    fn test_resolve_concat() {
        let matcher = Matcher::default();
        let entry = Value::from(json!({"first": "Ada", "last": "Lovelace"}));
        let node = Value::from(json!({"$concat": ["$first", " ", "$last"]}));
        assert_eq!(
            *resolve_expr(&matcher, &node, &entry).unwrap(),
            Value::from("Ada Lovelace")
        );
    }

    #[test]
    fn test_resolve_rejects_multi_key_mapping() {
        let matcher = Matcher::default();
        let entry = Value::from(json!({}));
        let node = Value::from(json!({"$concat": ["a"], "$other": 1}));
        assert!(resolve_expr(&matcher, &node, &entry).unwrap_err().is_query_error());
    }

    #[test]
    fn test_concat_rejects_non_strings() {
        let matcher = Matcher::default();
        let entry = Value::from(json!({"n": 3}));
        let err = concat(&matcher, &Value::from(json!(["$n", "x"])), &entry).unwrap_err();
        assert!(err.to_string().contains("non-string"));
    }
}
