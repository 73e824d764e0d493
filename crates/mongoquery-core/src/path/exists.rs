//! `$exists` evaluation for dotted paths

use crate::types::Value;

/// Evaluate `{"<path>": {"$exists": want}}` against `record`.
///
/// Walks `path` one segment at a time. When an array is met with a
/// non-numeric segment, the rest of the path is checked against each element
/// and the existence in any single element counts as existence. A failed
/// lookup anywhere yields `!want`.
///
/// The return value is the match result, not the existence itself: it is
/// `want` when the path exists and `!want` otherwise.
pub fn path_exists(path: &str, want: bool, record: &Value) -> bool {
    let segments: Vec<&str> = path.split('.').collect();
    segments_exist(&segments, want, record)
}

fn segments_exist(segments: &[&str], want: bool, record: &Value) -> bool {
    let mut current = record;

    for (i, segment) in segments.iter().enumerate() {
        current = match current {
            Value::Array(items) if !is_index(segment) => {
                let rest = &segments[i..];
                let found = items
                    .iter()
                    .any(|item| segments_exist(rest, want, item) == want);
                return if found { want } else { !want };
            }
            Value::Array(items) => match segment.parse::<usize>().ok().and_then(|idx| items.get(idx)) {
                Some(item) => item,
                None => return !want,
            },
            Value::Object(map) => match map.get(*segment) {
                Some(value) => value,
                None => return !want,
            },
            _ => return !want,
        };
    }

    want
}

fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Value {
        Value::from(json!({
            "items": [{"x": 1}, {"y": 2}],
            "nested": {"a": {"b": null}},
            "list": [10, 20],
            "label": "abc"
        }))
    }

    #[test]
    fn test_exists_in_any_array_element() {
        let data = record();
        assert!(path_exists("items.x", true, &data));
        assert!(!path_exists("items.z", true, &data));
    }

    #[test]
    fn test_not_exists_in_array_elements() {
        let data = record();
        assert!(!path_exists("items.x", false, &data));
        assert!(path_exists("items.z", false, &data));
    }

    #[test]
    fn test_exists_nested_null_counts_as_present() {
        let data = record();
        assert!(path_exists("nested.a.b", true, &data));
        assert!(!path_exists("nested.a.c", true, &data));
    }

    #[test]
    fn test_exists_numeric_index() {
        let data = record();
        assert!(path_exists("list.1", true, &data));
        assert!(!path_exists("list.2", true, &data));
        assert!(path_exists("items.0.x", true, &data));
        assert!(!path_exists("items.1.x", true, &data));
    }

    #[test]
    fn test_exists_through_scalar_fails() {
        let data = record();
        assert!(!path_exists("label.length", true, &data));
        assert!(!path_exists("label.0", true, &data));
        assert!(path_exists("label.0", false, &data));
    }
}
