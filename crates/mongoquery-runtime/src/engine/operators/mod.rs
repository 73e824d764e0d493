//! Query operator handlers
//!
//! Every handler has the shape `(matcher, condition, entry) -> Result<bool>`
//! and is stateless; see `registry` for the name-to-handler table.

pub(crate) mod array;
pub(crate) mod comparison;
pub(crate) mod element;
pub(crate) mod evaluation;
pub(crate) mod logical;
