//! In-memory composed-tree arena.
//!
//! Reference [`TreeAccess`] backend used by the tests and benches, and by
//! embedders that have no host structure of their own. Nodes live in a flat
//! `Vec` indexed by [`NodeId`]; structural invariants (single parent, single
//! hosted sub-tree, targets must exist) are enforced at construction time so
//! that the read path stays total.
//!
//! Cyclic composition is representable on purpose: a redirect node may
//! project an ancestor of itself. The searcher's depth bound is what makes
//! such structures safe to walk.

use serde::{Deserialize, Serialize};

use crate::error::{TreeError, TreeResult};

use super::access::TreeAccess;
use super::node::{NodeData, NodeId, NodeKind};

/// Arena-backed composed tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TreeArena {
    nodes: Vec<NodeData>,
}

impl TreeArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the arena holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `node` exists in this arena.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        (node.raw() as usize) < self.nodes.len()
    }

    /// Create a detached element node.
    pub fn new_element(&mut self, label: impl Into<String>) -> NodeId {
        self.push(NodeData::new(NodeKind::Element, label))
    }

    /// Create a detached text node.
    pub fn new_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push(NodeData::new(NodeKind::Text, text))
    }

    /// Label of `node`, if it exists.
    #[must_use]
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.get(node).map(|n| n.label.as_str())
    }

    /// Kind of `node`, if it exists.
    #[must_use]
    pub fn kind(&self, node: NodeId) -> Option<NodeKind> {
        self.get(node).map(|n| n.kind)
    }

    /// Append `child` as the last ordinary child of `parent`.
    ///
    /// # Errors
    ///
    /// `NodeNotFound` if either id is unknown, `NotAnElement` if `parent`
    /// is a text node, `SelfAttachment` if `parent == child`, and
    /// `AlreadyAttached` if `child` already has a parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> TreeResult<()> {
        self.check_exists(parent)?;
        self.check_exists(child)?;
        if parent == child {
            return Err(TreeError::SelfAttachment(parent.raw()));
        }
        if self.nodes[parent.raw() as usize].kind != NodeKind::Element {
            return Err(TreeError::NotAnElement(parent.raw()));
        }
        if let Some(existing) = self.nodes[child.raw() as usize].parent {
            return Err(TreeError::AlreadyAttached {
                child: child.raw(),
                parent: existing.raw(),
            });
        }
        self.nodes[child.raw() as usize].parent = Some(parent);
        self.nodes[parent.raw() as usize].children.push(child);
        Ok(())
    }

    /// Attach `root` as the hosted sub-tree of `host`.
    ///
    /// The hosted root is reachable only through the host's indirection
    /// point: it gains no structural parent and does not appear among the
    /// host's ordinary children.
    ///
    /// # Errors
    ///
    /// `NodeNotFound`, `NotAnElement` (host or root is text),
    /// `SelfAttachment`, `HostOccupied` if `host` already hosts a sub-tree,
    /// and `AlreadyAttached` if `root` has a structural parent.
    pub fn attach_hosted(&mut self, host: NodeId, root: NodeId) -> TreeResult<()> {
        self.check_exists(host)?;
        self.check_exists(root)?;
        if host == root {
            return Err(TreeError::SelfAttachment(host.raw()));
        }
        if self.nodes[host.raw() as usize].kind != NodeKind::Element {
            return Err(TreeError::NotAnElement(host.raw()));
        }
        if self.nodes[root.raw() as usize].kind != NodeKind::Element {
            return Err(TreeError::NotAnElement(root.raw()));
        }
        if self.nodes[host.raw() as usize].hosted_root.is_some() {
            return Err(TreeError::HostOccupied(host.raw()));
        }
        if let Some(existing) = self.nodes[root.raw() as usize].parent {
            return Err(TreeError::AlreadyAttached {
                child: root.raw(),
                parent: existing.raw(),
            });
        }
        self.nodes[host.raw() as usize].hosted_root = Some(root);
        Ok(())
    }

    /// Classify `node` as a redirect node with an initially empty target
    /// list. Idempotent for nodes already marked.
    ///
    /// # Errors
    ///
    /// `NodeNotFound` or `NotAnElement`.
    pub fn mark_redirect(&mut self, node: NodeId) -> TreeResult<()> {
        self.check_exists(node)?;
        let data = &mut self.nodes[node.raw() as usize];
        if data.kind != NodeKind::Element {
            return Err(TreeError::NotAnElement(node.raw()));
        }
        data.targets.get_or_insert_with(Vec::new);
        Ok(())
    }

    /// Replace the resolved projection targets of `redirect`.
    ///
    /// Targets may be of any kind, including text nodes; the searcher
    /// filters to elements when it resolves the projection.
    ///
    /// # Errors
    ///
    /// `NodeNotFound` if the redirect or any target is unknown,
    /// `NotARedirect` if `redirect` was never marked via
    /// [`Self::mark_redirect`].
    pub fn assign_targets(&mut self, redirect: NodeId, targets: Vec<NodeId>) -> TreeResult<()> {
        self.check_exists(redirect)?;
        for &target in &targets {
            self.check_exists(target)?;
        }
        match self.nodes[redirect.raw() as usize].targets {
            Some(ref mut slots) => {
                *slots = targets;
                Ok(())
            }
            None => Err(TreeError::NotARedirect(redirect.raw())),
        }
    }

    /// Serialize the arena to a JSON snapshot.
    ///
    /// # Errors
    ///
    /// `Snapshot` if serialization fails.
    pub fn to_json(&self) -> TreeResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Rebuild an arena from a JSON snapshot produced by [`Self::to_json`].
    ///
    /// # Errors
    ///
    /// `Snapshot` if the payload does not parse.
    pub fn from_json(json: &str) -> TreeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn push(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len() as u64);
        self.nodes.push(data);
        id
    }

    fn get(&self, node: NodeId) -> Option<&NodeData> {
        self.nodes.get(node.raw() as usize)
    }

    fn check_exists(&self, node: NodeId) -> TreeResult<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(TreeError::NodeNotFound(node.raw()))
        }
    }
}

impl TreeAccess for TreeArena {
    fn children(&self, node: NodeId) -> Vec<NodeId> {
        // Cloned snapshot: iteration must not observe later arena changes.
        self.get(node).map(|n| n.children.clone()).unwrap_or_default()
    }

    fn hosted_root(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.hosted_root)
    }

    fn is_redirect(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(|n| n.targets.is_some())
    }

    fn projection_targets(&self, node: NodeId) -> Vec<NodeId> {
        self.get(node)
            .and_then(|n| n.targets.clone())
            .unwrap_or_default()
    }

    fn is_element(&self, node: NodeId) -> bool {
        self.get(node).is_some_and(|n| n.kind == NodeKind::Element)
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.parent)
    }
}
