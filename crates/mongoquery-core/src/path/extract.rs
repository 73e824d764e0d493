//! Value extraction along a field path

use std::borrow::Cow;

use crate::error::PathError;
use crate::types::Value;

/// Resolve `path` against `record`, mapping an out-of-range index to `Undefined`.
///
/// A failed index anywhere in the walk makes the whole result `Undefined`,
/// including when it happens inside a projection over array elements.
pub fn extract<'a>(record: &'a Value, path: &[&str]) -> Cow<'a, Value> {
    try_extract(record, path).unwrap_or_else(|err| {
        log::trace!("path {:?} did not resolve: {}", path, err);
        Cow::Owned(Value::Undefined)
    })
}

/// Resolve `path` against `record`.
///
/// - An empty path yields the record itself.
/// - Null propagates: any path through `null` yields `null`.
/// - On an array, an integer segment indexes it (negative counts from the
///   end); any other segment is applied with the full path to every element
///   and the results are collected into a new array.
/// - On an object, a present key is followed; otherwise the result is
///   `Undefined`, as it is for a scalar with path remaining.
///
/// Only an out-of-range index is an error.
pub fn try_extract<'a>(record: &'a Value, path: &[&str]) -> Result<Cow<'a, Value>, PathError> {
    let Some((head, tail)) = path.split_first() else {
        return Ok(Cow::Borrowed(record));
    };

    match record {
        Value::Null => Ok(Cow::Borrowed(record)),
        Value::Array(items) => match head.parse::<i64>() {
            Ok(index) => {
                let item = resolve_index(items, index)?;
                try_extract(item, tail)
            }
            Err(_) => {
                let projected = items
                    .iter()
                    .map(|item| try_extract(item, path).map(Cow::into_owned))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Cow::Owned(Value::Array(projected)))
            }
        },
        Value::Object(map) => match map.get(*head) {
            Some(value) => try_extract(value, tail),
            None => Ok(Cow::Owned(Value::Undefined)),
        },
        _ => Ok(Cow::Owned(Value::Undefined)),
    }
}

fn resolve_index(items: &[Value], index: i64) -> Result<&Value, PathError> {
    let len = items.len();
    let position = if index < 0 {
        (len as i64).checked_add(index)
    } else {
        Some(index)
    };

    position
        .and_then(|p| usize::try_from(p).ok())
        .and_then(|p| items.get(p))
        .ok_or(PathError::IndexOutOfRange { index, len })
}
