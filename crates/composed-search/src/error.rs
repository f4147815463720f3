//! Error types for composed-tree construction.
//!
//! The searcher itself is total and never returns an error: malformed or
//! cyclic structures degrade to a depth-truncated result. Only the arena
//! construction API in [`crate::tree`] is fallible, and its errors are
//! typed here.

use thiserror::Error;

/// Result type alias for arena construction operations.
pub type TreeResult<T> = Result<T, TreeError>;

/// Error type for composed-tree construction.
///
/// Each variant carries enough context to identify the offending node.
/// Read paths ([`crate::tree::TreeAccess`]) never produce these: structural
/// invariants are enforced at construction time so that reads stay total.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Referenced node does not exist in the arena.
    #[error("node not found: {0}")]
    NodeNotFound(u64),

    /// Operation requires an element node but got a text node.
    #[error("node {0} is not an element")]
    NotAnElement(u64),

    /// Projection targets assigned to a node never marked as a redirect.
    #[error("node {0} is not a redirect node")]
    NotARedirect(u64),

    /// Node already has a structural parent.
    #[error("node {child} is already attached (parent: {parent})")]
    AlreadyAttached { child: u64, parent: u64 },

    /// Host already carries a hosted sub-tree.
    #[error("node {0} already hosts a sub-tree")]
    HostOccupied(u64),

    /// A node cannot be attached beneath itself.
    #[error("node {0} cannot be attached to itself")]
    SelfAttachment(u64),

    /// Arena snapshot (de)serialization failed.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl From<serde_json::Error> for TreeError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json errors include line/column info in to_string()
        TreeError::Snapshot(err.to_string())
    }
}

// Compile-time verification that TreeError is thread-safe
static_assertions::assert_impl_all!(TreeError: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_node_not_found() {
        let err = TreeError::NodeNotFound(42);
        let msg = err.to_string();
        assert!(msg.contains("42"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_error_display_already_attached() {
        let err = TreeError::AlreadyAttached { child: 7, parent: 3 };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_error_display_not_a_redirect() {
        let err = TreeError::NotARedirect(9);
        assert!(err.to_string().contains("not a redirect"));
    }

    #[test]
    fn test_tree_result_type_alias() {
        fn example_fn() -> TreeResult<u32> {
            Ok(42)
        }
        assert_eq!(example_fn().unwrap(), 42);
    }

    #[test]
    fn test_tree_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TreeError>();
    }
}
