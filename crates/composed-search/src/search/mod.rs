//! Depth-bounded search over composed trees.
//!
//! The searcher walks ordinary children, hosted sub-trees, and redirect
//! projections in document order, collecting nodes the caller's
//! [`NodeFilter`] accepts while its skip side prunes whole branches.
//!
//! Skipped nodes short-circuit before the match check, matching never stops
//! descent, and the depth bound makes the walk total on any input.

mod traversal;
mod types;

#[cfg(test)]
mod tests;

pub use self::traversal::{collect_all, search, search_with_report};
pub use self::types::{
    FilterFns, MatchAll, NodeFilter, SearchParams, SearchReport, DEFAULT_MAX_DEPTH,
};
