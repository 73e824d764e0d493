//! Field Path Resolution
//!
//! Helpers for navigating records with dot-notation paths such as
//! `"items.0.sku"`. Numeric segments index arrays; any other segment applied
//! to an array is projected over every element.

mod exists;
mod extract;

pub use exists::path_exists;
pub use extract::{extract, try_extract};

/// Split a dotted path into its segments
pub fn split_path(path: &str) -> Vec<&str> {
    path.split('.').collect()
}
