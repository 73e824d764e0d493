//! Query evaluation engine
//!
//! Provides the recursive matcher and the operators it dispatches to.

mod expr;
pub mod matcher;
mod operators;
pub mod registry;

#[cfg(test)]
mod tests;

// Re-export for convenience
pub use matcher::Matcher;
pub use registry::{ExprOperator, OperatorCategory, QueryOperator};
