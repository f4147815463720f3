//! Composed-tree model and capability surface.
//!
//! A composed tree has three kinds of child relationships:
//!
//! - **ordinary child**: plain parent/child edge
//! - **hosts sub-tree**: an element carries a nested tree reachable only
//!   through its indirection point, never through its child list
//! - **redirects to**: a redirect node projects nodes owned elsewhere in
//!   the tree into its own position (its local children are unprojected
//!   fallback content)
//!
//! The searcher in [`crate::search`] walks all three through the
//! [`TreeAccess`] trait. [`TreeArena`] is the bundled reference backend.

mod access;
mod arena;
mod node;

#[cfg(test)]
mod tests;

pub use self::access::TreeAccess;
pub use self::arena::TreeArena;
pub use self::node::{NodeId, NodeKind};
