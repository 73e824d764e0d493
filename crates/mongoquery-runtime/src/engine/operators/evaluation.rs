//! Evaluation operators

use mongoquery_core::Value;

use crate::engine::matcher::Matcher;
use crate::error::{MatchError, Result};
use crate::pattern::{PatternFlags, RegexLiteral};

pub(crate) fn mod_(_: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    let (divisor, remainder) = match condition.as_array() {
        Some([divisor, remainder]) if divisor.is_number() && remainder.is_number() => {
            (divisor, remainder)
        }
        _ => {
            return Err(MatchError::query(format!(
                "$mod requires [divisor, remainder], got {}",
                condition
            )))
        }
    };

    let computed = match (entry, divisor) {
        (Value::Int(_), Value::Int(0)) | (Value::Float(_), Value::Int(0)) => {
            return Err(MatchError::query("$mod divisor must not be zero"));
        }
        (Value::Int(e), Value::Int(d)) => Value::Int(floored_rem_i64(*e, *d)),
        (Value::Int(_) | Value::Float(_), _) => {
            let (e, d) = (entry.as_f64(), divisor.as_f64());
            match (e, d) {
                (Some(_), Some(d)) if d == 0.0 => {
                    return Err(MatchError::query("$mod divisor must not be zero"));
                }
                (Some(e), Some(d)) => Value::Float(floored_rem_f64(e, d)),
                _ => return Ok(false),
            }
        }
        _ => return Ok(false),
    };

    Ok(computed == *remainder)
}

/// Remainder whose sign follows the divisor
fn floored_rem_i64(dividend: i64, divisor: i64) -> i64 {
    let rem = dividend.checked_rem(divisor).unwrap_or(0);
    if rem != 0 && (rem < 0) != (divisor < 0) {
        rem + divisor
    } else {
        rem
    }
}

fn floored_rem_f64(dividend: f64, divisor: f64) -> f64 {
    let rem = dividend % divisor;
    if rem != 0.0 && (rem < 0.0) != (divisor < 0.0) {
        rem + divisor
    } else {
        rem
    }
}

pub(crate) fn regex(matcher: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
    let Value::String(text) = entry else {
        return Ok(false);
    };

    let compiled = match condition {
        // Pre-built regex values carry their own flags
        Value::Regex(regex) => {
            let flags = PatternFlags::parse(regex.flags()).unwrap_or_default();
            matcher.patterns().compile(regex.pattern(), flags)?
        }
        Value::String(source) => {
            let literal = RegexLiteral::from_source(source);
            matcher.patterns().compile(literal.pattern, literal.flags)?
        }
        other => {
            return Err(MatchError::query(format!(
                "{} is not a regular expression and should be a string",
                other
            )))
        }
    };

    Ok(compiled.is_match(text))
}

pub(crate) fn options(_: &Matcher, _: &Value, _: &Value) -> Result<bool> {
    Err(MatchError::NotImplemented("$options".to_string()))
}

pub(crate) fn text(_: &Matcher, _: &Value, _: &Value) -> Result<bool> {
    Err(MatchError::NotImplemented("$text".to_string()))
}

pub(crate) fn where_(_: &Matcher, _: &Value, _: &Value) -> Result<bool> {
    Err(MatchError::NotImplemented("$where".to_string()))
}
