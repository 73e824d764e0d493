//! Logical operators

use mongoquery_core::Value;

use crate::engine::matcher::Matcher;
use crate::error::{MatchError, Result};

pub(crate) fn and(matcher: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    for sub_condition in sub_conditions("$and", condition)? {
        if !matcher.matches(sub_condition, entry)? {
            return Ok(false);
        }
    }
    Ok(true)
}

pub(crate) fn or(matcher: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    for sub_condition in sub_conditions("$or", condition)? {
        if matcher.matches(sub_condition, entry)? {
            return Ok(true);
        }
    }
    Ok(false)
}

pub(crate) fn nor(matcher: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    for sub_condition in sub_conditions("$nor", condition)? {
        if matcher.matches(sub_condition, entry)? {
            return Ok(false);
        }
    }
    Ok(true)
}

pub(crate) fn not(matcher: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    matcher.matches(condition, entry).map(|matched| !matched)
}

fn sub_conditions<'a>(operator: &str, condition: &'a Value) -> Result<&'a [Value]> {
    condition.as_array().ok_or_else(|| {
        MatchError::query(format!(
            "{} has been attributed incorrect argument {}",
            operator, condition
        ))
    })
}
