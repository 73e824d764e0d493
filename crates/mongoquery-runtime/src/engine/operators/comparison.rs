//! Comparison operators
//!
//! Ordering comparisons between incomparable values do not match rather than
//! fail.

use std::cmp::Ordering;

use mongoquery_core::Value;

use crate::engine::matcher::Matcher;
use crate::error::{MatchError, Result};

pub(crate) fn eq(_: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    Ok(entry == condition)
}

pub(crate) fn ne(_: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    Ok(entry != condition)
}

pub(crate) fn gt(_: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    Ok(ordered(condition, entry, |o| o == Ordering::Greater))
}

pub(crate) fn gte(_: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    Ok(ordered(condition, entry, |o| o != Ordering::Less))
}

pub(crate) fn lt(_: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    Ok(ordered(condition, entry, |o| o == Ordering::Less))
}

pub(crate) fn lte(_: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    Ok(ordered(condition, entry, |o| o != Ordering::Greater))
}

pub(crate) fn in_(_: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    let Value::Array(candidates) = condition else {
        return Err(MatchError::query(format!(
            "$in requires an array, got {}",
            condition
        )));
    };

    Ok(candidates.iter().any(|candidate| match entry {
        Value::Array(_) => entry.contains(candidate),
        _ => candidate == entry,
    }))
}

pub(crate) fn nin(matcher: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    in_(matcher, condition, entry).map(|found| !found)
}

/// Compare `entry` against `condition`, treating incomparable pairs as no match
fn ordered(condition: &Value, entry: &Value, accept: impl Fn(Ordering) -> bool) -> bool {
    match entry.compare(condition) {
        Some(ordering) => accept(ordering),
        None => {
            tracing::trace!(
                "Incomparable values: {} ({}) vs {} ({}), returning false",
                entry,
                entry.type_name(),
                condition,
                condition.type_name()
            );
            false
        }
    }
}
