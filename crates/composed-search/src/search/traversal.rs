//! Core composed-tree search implementation.
//!
//! Recursive depth-bounded walk over the three child relationships of a
//! composed tree. Recursion depth is capped by `SearchParams::max_depth`,
//! so the stack cannot grow past the bound regardless of tree shape; the
//! same bound is what terminates walks over cyclic composition.

use crate::tree::{NodeId, TreeAccess};

use super::types::{MatchAll, NodeFilter, SearchParams, SearchReport};

/// Search the composed tree under `root` and collect matching nodes.
///
/// Walks the direct children of `root` in order and recurses through all
/// three composition edges, one depth level per descent:
///
/// - a child hosting a nested sub-tree is descended through its hosted root
/// - a redirect child resumes the walk from the parent of its first
///   element projection target (the branch that owns the projected content)
/// - any other child is descended directly
///
/// `filter.should_skip` prunes a child and its entire subtree before the
/// match check; `filter.is_match` decides result membership. Matching never
/// stops descent.
///
/// This is a total function: it cannot fail or panic, and pathological
/// trees (cycles through projection or hosting) degrade to a depth-bounded
/// partial result.
///
/// # Example
///
/// ```
/// use composed_search::search::{search, FilterFns, SearchParams};
/// use composed_search::tree::TreeArena;
///
/// let mut arena = TreeArena::new();
/// let root = arena.new_element("root");
/// let a = arena.new_element("a");
/// let b = arena.new_element("b");
/// arena.append_child(root, a).unwrap();
/// arena.append_child(root, b).unwrap();
///
/// let filter = FilterFns::new(|_| false, move |n| n == a);
/// let found = search(&arena, root, &filter, SearchParams::default());
/// assert_eq!(found, vec![a]);
/// ```
pub fn search<T, F>(tree: &T, root: NodeId, filter: &F, params: SearchParams) -> Vec<NodeId>
where
    T: TreeAccess,
    F: NodeFilter,
{
    search_with_report(tree, root, filter, params).matches
}

/// Like [`search`], but also reports visit counts, the deepest level
/// examined, and whether any branch was cut off by the depth bound.
pub fn search_with_report<T, F>(
    tree: &T,
    root: NodeId,
    filter: &F,
    params: SearchParams,
) -> SearchReport
where
    T: TreeAccess,
    F: NodeFilter,
{
    let mut report = SearchReport::new();
    search_level(tree, root, filter, params.max_depth, 0, &mut report);

    log::debug!(
        "composed search from {}: {} matches, {} visited, max_depth_seen={}, truncated={}",
        root,
        report.match_count(),
        report.nodes_visited,
        report.max_depth_seen,
        report.truncated
    );

    report
}

/// Collect every node in the composed neighborhood of `root`.
///
/// Convenience wrapper around [`search`] with a match-all filter.
pub fn collect_all<T: TreeAccess>(tree: &T, root: NodeId, params: SearchParams) -> Vec<NodeId> {
    search(tree, root, &MatchAll, params)
}

/// One recursion level: iterate the direct children of `root` at `depth`.
fn search_level<T, F>(
    tree: &T,
    root: NodeId,
    filter: &F,
    max_depth: usize,
    depth: usize,
    report: &mut SearchReport,
) where
    T: TreeAccess,
    F: NodeFilter,
{
    // Depth guard fires at call entry, before any child is examined.
    if depth >= max_depth {
        report.truncated = true;
        log::debug!("search truncated at {} (depth {} >= limit {})", root, depth, max_depth);
        return;
    }

    // Materialized snapshot: a live child collection mutating underneath
    // must not affect an in-progress iteration.
    let children = tree.children(root);

    for child in children {
        // Skip check runs first and prunes the whole subtree, including
        // anything a redirect below would have projected.
        if filter.should_skip(child) {
            continue;
        }

        report.nodes_visited += 1;
        report.max_depth_seen = report.max_depth_seen.max(depth);

        if filter.is_match(child) {
            report.matches.push(child);
        }

        // Descent is mutually exclusive, in this priority order: hosted
        // sub-tree, then redirect projection, then plain child.
        if let Some(hosted) = tree.hosted_root(child) {
            search_level(tree, hosted, filter, max_depth, depth + 1, report);
        } else if tree.is_redirect(child) {
            // The walk resumes from the projected content's actual
            // container, not the redirect's local fallback children.
            // Non-element targets (text projections) do not qualify.
            let anchor = tree
                .projection_targets(child)
                .into_iter()
                .find(|&target| tree.is_element(target))
                .and_then(|target| tree.parent(target));
            if let Some(anchor) = anchor {
                search_level(tree, anchor, filter, max_depth, depth + 1, report);
            }
        } else {
            search_level(tree, child, filter, max_depth, depth + 1, report);
        }
    }
}
