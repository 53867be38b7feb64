//! Pagination module
//!
//! Drains a cursor-paginated collection endpoint into one in-memory
//! response.
//!
//! # Overview
//!
//! The [`Aggregator`] repeatedly builds the query for the current request,
//! fetches one page through a [`Transport`](crate::http::Transport), decodes
//! it and appends its records. It stops when a page carries an empty
//! `nextPageCursor` and returns a normalized envelope holding every record
//! in arrival order. Any fetch or decode failure aborts the whole call; no
//! partial result is ever returned.

mod aggregator;
mod types;

pub use aggregator::Aggregator;
pub use types::{PaginationConfig, PaginationState, Phase};
