//! Capability surface the searcher requires from a host structure.
//!
//! The searcher never owns a tree. Everything it needs — children
//! enumeration, hosted sub-tree lookup, redirect classification, projection
//! resolution, parent lookup — is supplied through this trait, so any
//! structure that can answer these five questions is searchable.
//! [`super::TreeArena`] is the reference implementation.

use super::node::NodeId;

/// Read-only access to a composed tree.
///
/// All methods are total: an unknown id behaves like a leaf text node
/// (no children, no hosted root, not a redirect, no parent). Implementors
/// must return child lists as a snapshot taken at call time; the searcher
/// iterates the returned `Vec` and is not affected by concurrent changes
/// to the underlying collection.
pub trait TreeAccess {
    /// Direct children of `node`, in stable document order.
    fn children(&self, node: NodeId) -> Vec<NodeId>;

    /// Root of the nested sub-tree hosted by `node`, if it hosts one.
    fn hosted_root(&self, node: NodeId) -> Option<NodeId>;

    /// Whether `node` is classified as a redirect node.
    fn is_redirect(&self, node: NodeId) -> bool;

    /// Currently resolved projection targets of `node`, in order.
    ///
    /// Empty unless `node` is a redirect node. Targets are returned
    /// unfiltered; the searcher drops non-element targets itself.
    fn projection_targets(&self, node: NodeId) -> Vec<NodeId>;

    /// Whether `node` is a structural element node.
    fn is_element(&self, node: NodeId) -> bool;

    /// Structural parent of `node`, if attached.
    fn parent(&self, node: NodeId) -> Option<NodeId>;
}
