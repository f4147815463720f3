//! Parameter, filter, and result types for composed-tree search.

use serde::{Deserialize, Serialize};

use crate::tree::NodeId;

/// Default recursion depth bound.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Parameters for a composed-tree search.
///
/// The depth bound is the only safety mechanism the searcher has: it turns
/// cyclic composition (projection loops, repeated hosting) into a silent,
/// deterministic truncation of the result instead of unbounded recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Maximum recursion depth (default: 20).
    /// Depth 0 is the root's own child list; descending into an ordinary
    /// child, a hosted sub-tree, or through a redirect projection each
    /// cost one level. Sibling iteration is free.
    pub max_depth: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SearchParams {
    /// Create params with a specific depth bound.
    #[must_use]
    pub fn with_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Builder: set the depth bound.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Caller-supplied match/skip predicates.
///
/// Both methods must be cheap and side-effect-free: `should_skip` runs once
/// per iterated child before anything else, `is_match` once per child that
/// survived the skip check. A skipped node prunes its entire subtree,
/// including any content a redirect beneath it would have projected.
pub trait NodeFilter {
    /// Whether `node` and everything beneath it should be excluded.
    fn should_skip(&self, node: NodeId) -> bool;

    /// Whether `node` belongs in the result.
    fn is_match(&self, node: NodeId) -> bool;
}

/// Adapter turning two closures into a [`NodeFilter`].
pub struct FilterFns<S, M> {
    skip: S,
    matches: M,
}

impl<S, M> FilterFns<S, M>
where
    S: Fn(NodeId) -> bool,
    M: Fn(NodeId) -> bool,
{
    /// Wrap `skip` and `is_match` closures.
    pub fn new(skip: S, matches: M) -> Self {
        Self { skip, matches }
    }
}

impl<S, M> NodeFilter for FilterFns<S, M>
where
    S: Fn(NodeId) -> bool,
    M: Fn(NodeId) -> bool,
{
    fn should_skip(&self, node: NodeId) -> bool {
        (self.skip)(node)
    }

    fn is_match(&self, node: NodeId) -> bool {
        (self.matches)(node)
    }
}

/// Filter that skips nothing and matches every visited node.
///
/// Useful for collecting the full composed neighborhood of a root.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchAll;

impl NodeFilter for MatchAll {
    fn should_skip(&self, _node: NodeId) -> bool {
        false
    }

    fn is_match(&self, _node: NodeId) -> bool {
        true
    }
}

/// Result of a composed-tree search.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchReport {
    /// Matching nodes in document order of discovery.
    ///
    /// Not deduplicated: a node reachable through two distinct projection
    /// chains within the depth budget appears twice.
    pub matches: Vec<NodeId>,

    /// Number of children examined (skipped children are not counted).
    pub nodes_visited: usize,

    /// Deepest recursion level at which a child was examined.
    pub max_depth_seen: usize,

    /// Whether some branch hit the depth bound and was cut short.
    pub truncated: bool,
}

impl SearchReport {
    /// Create an empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of matches found.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Whether no node matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
