//! Operator registry
//!
//! Maps `$`-prefixed operator names to their kinds, and each kind to its
//! handler. The name table is built once and shared read-only.

use std::collections::HashMap;
use std::sync::OnceLock;

use mongoquery_core::Value;

use super::matcher::Matcher;
use super::operators::{array, comparison, element, evaluation, logical};
use super::expr;
use crate::error::{MatchError, Result};

/// Signature shared by every query operator: `(matcher, condition, entry)`
pub(crate) type Handler = fn(&Matcher, &Value, &Value) -> Result<bool>;

/// Operator families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Comparison,
    Logical,
    Element,
    Evaluation,
    Array,
    Comment,
    Expression,
}

/// Query operators usable as condition keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryOperator {
    // Comparison
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Nin,

    // Logical
    And,
    Or,
    Nor,
    Not,

    // Element
    Exists,
    Type,

    // Evaluation
    Mod,
    Regex,
    Options,
    Text,
    Where,

    // Array
    All,
    ElemMatch,
    Size,

    // Comment
    Comment,

    // Expression
    Expr,
}

const ALL_OPERATORS: [QueryOperator; 24] = [
    QueryOperator::Eq,
    QueryOperator::Ne,
    QueryOperator::Gt,
    QueryOperator::Gte,
    QueryOperator::Lt,
    QueryOperator::Lte,
    QueryOperator::In,
    QueryOperator::Nin,
    QueryOperator::And,
    QueryOperator::Or,
    QueryOperator::Nor,
    QueryOperator::Not,
    QueryOperator::Exists,
    QueryOperator::Type,
    QueryOperator::Mod,
    QueryOperator::Regex,
    QueryOperator::Options,
    QueryOperator::Text,
    QueryOperator::Where,
    QueryOperator::All,
    QueryOperator::ElemMatch,
    QueryOperator::Size,
    QueryOperator::Comment,
    QueryOperator::Expr,
];

static REGISTRY: OnceLock<HashMap<&'static str, QueryOperator>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, QueryOperator> {
    REGISTRY.get_or_init(|| ALL_OPERATORS.iter().map(|op| (op.name(), *op)).collect())
}

impl QueryOperator {
    /// Look up an operator by name, without the `$` prefix
    pub fn from_name(name: &str) -> Option<Self> {
        registry().get(name).copied()
    }

    /// Look up the operator for a `$`-prefixed condition key
    pub fn from_key(key: &str) -> Result<Self> {
        key.strip_prefix('$')
            .and_then(Self::from_name)
            .ok_or_else(|| MatchError::query(format!("'{}' operator isn't supported", key)))
    }

    /// Operator name without the `$` prefix
    pub fn name(self) -> &'static str {
        match self {
            QueryOperator::Eq => "eq",
            QueryOperator::Ne => "ne",
            QueryOperator::Gt => "gt",
            QueryOperator::Gte => "gte",
            QueryOperator::Lt => "lt",
            QueryOperator::Lte => "lte",
            QueryOperator::In => "in",
            QueryOperator::Nin => "nin",
            QueryOperator::And => "and",
            QueryOperator::Or => "or",
            QueryOperator::Nor => "nor",
            QueryOperator::Not => "not",
            QueryOperator::Exists => "exists",
            QueryOperator::Type => "type",
            QueryOperator::Mod => "mod",
            QueryOperator::Regex => "regex",
            QueryOperator::Options => "options",
            QueryOperator::Text => "text",
            QueryOperator::Where => "where",
            QueryOperator::All => "all",
            QueryOperator::ElemMatch => "elemMatch",
            QueryOperator::Size => "size",
            QueryOperator::Comment => "comment",
            QueryOperator::Expr => "expr",
        }
    }

    pub fn category(self) -> OperatorCategory {
        match self {
            QueryOperator::Eq
            | QueryOperator::Ne
            | QueryOperator::Gt
            | QueryOperator::Gte
            | QueryOperator::Lt
            | QueryOperator::Lte
            | QueryOperator::In
            | QueryOperator::Nin => OperatorCategory::Comparison,
            QueryOperator::And | QueryOperator::Or | QueryOperator::Nor | QueryOperator::Not => {
                OperatorCategory::Logical
            }
            QueryOperator::Exists | QueryOperator::Type => OperatorCategory::Element,
            QueryOperator::Mod
            | QueryOperator::Regex
            | QueryOperator::Options
            | QueryOperator::Text
            | QueryOperator::Where => OperatorCategory::Evaluation,
            QueryOperator::All | QueryOperator::ElemMatch | QueryOperator::Size => {
                OperatorCategory::Array
            }
            QueryOperator::Comment => OperatorCategory::Comment,
            QueryOperator::Expr => OperatorCategory::Expression,
        }
    }

    /// Returns true if this operator can be used as a comparison inside `$expr`
    pub fn is_comparison(self) -> bool {
        self.category() == OperatorCategory::Comparison
    }

    pub(crate) fn handler(self) -> Handler {
        match self {
            QueryOperator::Eq => comparison::eq,
            QueryOperator::Ne => comparison::ne,
            QueryOperator::Gt => comparison::gt,
            QueryOperator::Gte => comparison::gte,
            QueryOperator::Lt => comparison::lt,
            QueryOperator::Lte => comparison::lte,
            QueryOperator::In => comparison::in_,
            QueryOperator::Nin => comparison::nin,
            QueryOperator::And => logical::and,
            QueryOperator::Or => logical::or,
            QueryOperator::Nor => logical::nor,
            QueryOperator::Not => logical::not,
            QueryOperator::Exists => element::exists,
            QueryOperator::Type => element::type_,
            QueryOperator::Mod => evaluation::mod_,
            QueryOperator::Regex => evaluation::regex,
            QueryOperator::Options => evaluation::options,
            QueryOperator::Text => evaluation::text,
            QueryOperator::Where => evaluation::where_,
            QueryOperator::All => array::all,
            QueryOperator::ElemMatch => array::elem_match,
            QueryOperator::Size => array::size,
            QueryOperator::Comment => noop,
            QueryOperator::Expr => expr::expr,
        }
    }

    /// Apply this operator to `(condition, entry)`
    pub fn apply(self, matcher: &Matcher, condition: &Value, entry: &Value) -> Result<bool> {
        (self.handler())(matcher, condition, entry)
    }
}

/// Operators that only exist inside `$expr` and compute a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprOperator {
    Concat,
}

impl ExprOperator {
    /// Look up an expression operator by name, without the `$` prefix
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "concat" => Some(ExprOperator::Concat),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ExprOperator::Concat => "concat",
        }
    }

    /// Compute the operator's value over `args`
    pub(crate) fn evaluate(self, matcher: &Matcher, args: &Value, entry: &Value) -> Result<Value> {
        match self {
            ExprOperator::Concat => expr::concat(matcher, args, entry),
        }
    }
}

fn noop(_: &Matcher, _: &Value, _: &Value) -> Result<bool> {
    Ok(true)
}
