//! The read-only navigation store and its traversal.

use crate::node::{NavChildren, NavNode};
use serde::Serialize;
use std::sync::Arc;
use waypost_types::AnchorId;

/// The flat, ordered table of anchors a viewer uses to resequence and
/// paginate the tree.
///
/// Entries are opaque identifiers; they are not required to correspond to
/// tree targets, only to be valid references within the same document set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NavIndexTable {
    entries: Vec<AnchorId>,
}

impl NavIndexTable {
    pub(crate) fn new(entries: Vec<AnchorId>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AnchorId> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnchorId> {
        self.entries.iter()
    }

    /// The pagination lookup: returns the index of the last table entry
    /// lexicographically `<=` the given anchor, or `None` when the anchor
    /// sorts before every entry. Assumes the table is sorted, as generated
    /// tables are.
    pub fn bucket_for(&self, anchor: &AnchorId) -> Option<usize> {
        let upper = self
            .entries
            .partition_point(|entry| entry.as_str() <= anchor.as_str());
        upper.checked_sub(1)
    }
}

/// The two fixed prompt strings for the viewer's panel-synchronization
/// toggle control. `sync_on` is shown while synchronization is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleMessages {
    sync_on: String,
    sync_off: String,
}

impl ToggleMessages {
    pub(crate) fn new(sync_on: String, sync_off: String) -> Self {
        Self { sync_on, sync_off }
    }

    /// The prompt shown while panel synchronization is enabled.
    pub fn sync_on(&self) -> &str {
        &self.sync_on
    }

    /// The prompt shown while panel synchronization is disabled.
    pub fn sync_off(&self) -> &str {
        &self.sync_off
    }
}

/// The navigation data for one documentation set: the table-of-contents
/// tree, the flat anchor index table, and the toggle messages.
///
/// Constructed once at load time via [`crate::NavTreeBuilder`] and
/// read-only thereafter; share it between readers with an [`Arc`], no
/// locking is needed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavTreeStore {
    root: NavNode,
    index: NavIndexTable,
    toggle: ToggleMessages,
}

impl NavTreeStore {
    pub(crate) fn new(root: NavNode, index: NavIndexTable, toggle: ToggleMessages) -> Self {
        Self { root, index, toggle }
    }

    /// The root entry of the navigation tree.
    pub fn root(&self) -> &NavNode {
        &self.root
    }

    /// The flat anchor table used for pagination and search indexing.
    pub fn index_table(&self) -> &NavIndexTable {
        &self.index
    }

    /// The panel-synchronization toggle prompts.
    pub fn toggle_messages(&self) -> &ToggleMessages {
        &self.toggle
    }

    /// Walks the tree in pre-order, yielding `(depth, node)` pairs in
    /// declared order. The root is yielded first at depth 0.
    pub fn walk(&self) -> PreOrder<'_> {
        PreOrder {
            stack: vec![(0, &self.root)],
        }
    }

    /// Finds the first entry in pre-order whose target is the given
    /// anchor. This is the lookup panel synchronization performs when the
    /// displayed page changes.
    pub fn find(&self, anchor: &AnchorId) -> Option<&NavNode> {
        self.walk()
            .map(|(_, node)| node)
            .find(|node| node.target.anchor() == Some(anchor))
    }

    /// The total number of entries in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.walk().count()
    }

    /// Wraps the store for sharing between concurrent readers.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// Pre-order depth-first iterator over a navigation tree.
#[derive(Debug)]
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a NavNode)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a NavNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        if let NavChildren::Inline(children) = &node.children {
            // Reverse push so the first child is popped next.
            for child in children.iter().rev() {
                self.stack.push((depth + 1, child));
            }
        }
        Some((depth, node))
    }
}
