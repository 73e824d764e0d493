//! Recursive condition matcher

use mongoquery_core::path::{extract, path_exists, split_path};
use mongoquery_core::Value;

use super::registry::QueryOperator;
use crate::error::Result;
use crate::options::MatcherOptions;
use crate::pattern::PatternCache;

/// Evaluates query conditions against records.
///
/// Holds no per-record state; the only thing it keeps between calls is the
/// compiled-pattern cache, which is safe to share across threads.
#[derive(Debug, Default)]
pub struct Matcher {
    patterns: PatternCache,
}

impl Matcher {
    /// Create a matcher with the given options
    pub fn new(options: MatcherOptions) -> Self {
        Self {
            patterns: PatternCache::new(&options),
        }
    }

    /// Compiled-pattern cache used by `$regex`
    pub fn patterns(&self) -> &PatternCache {
        &self.patterns
    }

    /// Decide whether `entry` matches `condition`.
    ///
    /// A mapping condition is the conjunction of its entries. Any other
    /// condition is a literal: it must be an element of `entry` when `entry`
    /// is an array, and equal to `entry` otherwise.
    pub fn matches(&self, condition: &Value, entry: &Value) -> Result<bool> {
        match condition {
            Value::Object(entries) => {
                for (key, sub_condition) in entries {
                    if !self.process_condition(key, sub_condition, entry)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            _ => Ok(match entry {
                Value::Array(_) => entry.contains(condition),
                _ => condition == entry,
            }),
        }
    }

    /// Evaluate one `(key, condition)` pair of a query mapping against `entry`.
    ///
    /// `key` is either an operator (`$gt`) applied to `entry` itself, or a
    /// dotted field path resolved inside `entry` before matching.
    pub fn process_condition(&self, key: &str, condition: &Value, entry: &Value) -> Result<bool> {
        if let Value::Object(sub) = condition {
            if let Some(exists) = sub.get("$exists") {
                let want = exists.is_truthy();

                // A dotted path answers for the whole sub-condition
                if key.contains('.') {
                    return Ok(path_exists(key, want, entry));
                }

                let present = entry.as_object().is_some_and(|map| map.contains_key(key));
                if want != present {
                    return Ok(false);
                }
                if sub.len() == 1 {
                    return Ok(true);
                }
            }
        }

        if key.starts_with('$') {
            let op = QueryOperator::from_key(key)?;
            tracing::trace!(operator = key, %condition, "dispatching operator");
            return op.apply(self, condition, entry);
        }

        let extracted = extract(entry, &split_path(key));
        self.matches(condition, &extracted)
    }
}
