//! Array operators

use mongoquery_core::Value;

use crate::engine::matcher::Matcher;
use crate::error::{MatchError, Result};

/// Every item of the condition is a full sub-query that `entry` must match
pub(crate) fn all(matcher: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    let items = condition.as_array().ok_or_else(|| {
        MatchError::query(format!(
            "$all has been attributed incorrect argument {}",
            condition
        ))
    })?;

    for item in items {
        if !matcher.matches(item, entry)? {
            return Ok(false);
        }
    }
    Ok(true)
}

pub(crate) fn elem_match(matcher: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    let Value::Array(elements) = entry else {
        return Ok(false);
    };
    let Value::Object(sub_conditions) = condition else {
        return Err(MatchError::query(format!(
            "$elemMatch has been attributed incorrect argument {}",
            condition
        )));
    };

    for element in elements {
        let mut matched = true;
        for (key, sub_condition) in sub_conditions {
            if !matcher.process_condition(key, sub_condition, element)? {
                matched = false;
                break;
            }
        }
        if matched {
            return Ok(true);
        }
    }
    Ok(false)
}

pub(crate) fn size(_: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    let Value::Int(expected) = condition else {
        return Err(MatchError::query(format!(
            "$size has been attributed incorrect argument {}",
            condition
        )));
    };

    Ok(match entry {
        Value::Array(items) => i64::try_from(items.len()).is_ok_and(|len| len == *expected),
        _ => false,
    })
}
