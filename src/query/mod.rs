//! Query builder module
//!
//! Converts typed requests into the flat string mapping sent as GET query
//! parameters. Required fields are always emitted; optional fields are
//! emitted only when present, so an absent field never shows up as an
//! empty value.

mod builder;

pub use builder::{CursorRequest, QueryBuilder, QueryValue, ToQuery};

#[cfg(test)]
mod tests;
