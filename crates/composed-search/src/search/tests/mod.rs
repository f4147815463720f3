//! Tests for the composed-tree searcher.

use crate::search::NodeFilter;
use crate::tree::{NodeId, TreeArena};


/// Label-driven filter shared by the search tests.
///
/// Matches nodes whose label equals `match_label`; skips nodes whose label
/// equals `skip_label`, when set.
pub(super) struct LabelFilter<'a> {
    arena: &'a TreeArena,
    match_label: &'static str,
    skip_label: Option<&'static str>,
}

impl<'a> LabelFilter<'a> {
    pub(super) fn matching(arena: &'a TreeArena, match_label: &'static str) -> Self {
        Self {
            arena,
            match_label,
            skip_label: None,
        }
    }

    pub(super) fn skipping(mut self, skip_label: &'static str) -> Self {
        self.skip_label = Some(skip_label);
        self
    }
}

impl NodeFilter for LabelFilter<'_> {
    fn should_skip(&self, node: NodeId) -> bool {
        match self.skip_label {
            Some(label) => self.arena.label(node) == Some(label),
            None => false,
        }
    }

    fn is_match(&self, node: NodeId) -> bool {
        self.arena.label(node) == Some(self.match_label)
    }
}
