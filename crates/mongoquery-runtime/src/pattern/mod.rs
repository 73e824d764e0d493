//! Regex support for `$regex`
//!
//! A small parser for `/pattern/flags` literals and a cache of compiled
//! patterns, so that a query reused across many records compiles each
//! pattern once.

mod cache;
mod literal;

pub use cache::PatternCache;
pub use literal::{PatternFlags, RegexLiteral};
