//! Node identity and classification types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a node within a [`super::TreeArena`].
///
/// Plain index newtype: cheap to copy, hashable, ordered by creation.
/// Foreign `TreeAccess` backends may mint their own ids however they like;
/// the searcher only requires `Copy + Eq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Raw index value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structural classification of a node.
///
/// Only elements participate in composition: children, hosted sub-trees,
/// and redirect classification are element-only. Text nodes can still be
/// projected by a redirect, but the searcher ignores non-element targets
/// when resolving projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Structural element node.
    Element,
    /// Text node; never descended into.
    Text,
}

/// Stored per-node state inside the arena.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct NodeData {
    pub kind: NodeKind,
    pub label: String,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Root of the nested sub-tree this element hosts, if any.
    pub hosted_root: Option<NodeId>,
    /// `Some` iff the element is classified as a redirect node; the vec
    /// holds its currently resolved projection targets, in order.
    pub targets: Option<Vec<NodeId>>,
}

impl NodeData {
    pub(crate) fn new(kind: NodeKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            parent: None,
            children: Vec::new(),
            hosted_root: None,
            targets: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_display() {
        assert_eq!(NodeId(17).to_string(), "#17");
    }

    #[test]
    fn test_node_id_ordering_follows_creation_index() {
        assert!(NodeId(0) < NodeId(1));
        assert_eq!(NodeId(3).raw(), 3);
    }
}
