//! Element operators

use mongoquery_core::{TypeSelector, Value};

use crate::engine::matcher::Matcher;
use crate::error::{MatchError, Result};

/// `$exists` is decided by the matcher before dispatch; reaching it here is a no-op
pub(crate) fn exists(_: &Matcher, _: &Value, _: &Value) -> Result<bool> {
    Ok(true)
}

pub(crate) fn type_(_: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    let selector = TypeSelector::from_condition(condition).ok_or_else(|| {
        MatchError::query(format!("$type has been used with unknown type {}", condition))
    })?;
    Ok(selector.matches(entry))
}
