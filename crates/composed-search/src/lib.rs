//! Depth-bounded search over composed trees.
//!
//! A composed tree is not a plain parent/child hierarchy: an element may
//! host a nested sub-tree reachable only through its indirection point, and
//! may contain redirect nodes that project content owned elsewhere in the
//! tree into the current position (slot projection). This crate provides
//! the search algorithm that walks all three child relationships with
//! caller-supplied match and skip predicates, bounded in depth so that
//! cyclic or malformed composition truncates instead of hanging.
//!
//! # Architecture
//!
//! - **error**: `TreeError` for fallible arena construction
//! - **tree**: node model, the `TreeAccess` capability trait, and the
//!   `TreeArena` reference backend
//! - **search**: the searcher — params, filters, report, traversal
//!
//! The searcher is generic over [`tree::TreeAccess`]; it never owns,
//! creates, or mutates nodes and keeps no state between calls.
//!
//! # Example
//!
//! ```
//! use composed_search::search::{search, FilterFns, SearchParams};
//! use composed_search::tree::TreeArena;
//!
//! let mut arena = TreeArena::new();
//! let root = arena.new_element("root");
//! let host = arena.new_element("host");
//! let shadow = arena.new_element("shadow-root");
//! let inner = arena.new_element("inner");
//! arena.append_child(root, host).unwrap();
//! arena.attach_hosted(host, shadow).unwrap();
//! arena.append_child(shadow, inner).unwrap();
//!
//! // Match everything labelled "inner"; the hosted sub-tree is walked
//! // through the host's indirection point.
//! let filter = FilterFns::new(
//!     |_| false,
//!     |n| arena.label(n) == Some("inner"),
//! );
//! let found = search(&arena, root, &filter, SearchParams::default());
//! assert_eq!(found, vec![inner]);
//! ```

pub mod error;
pub mod search;
pub mod tree;

// Re-exports for convenience
pub use error::{TreeError, TreeResult};
pub use search::{
    collect_all, search, search_with_report, FilterFns, MatchAll, NodeFilter, SearchParams,
    SearchReport, DEFAULT_MAX_DEPTH,
};
pub use tree::{NodeId, NodeKind, TreeAccess, TreeArena};
