//! Validated construction of a [`NavTreeStore`].
//!
//! The store has no failure modes once built, so all defensive checking
//! happens here: anchor syntax, index-table shape, toggle-message shape,
//! and a depth bound guarding against corrupted input.

use crate::error::TreeError;
use crate::node::{NavChildren, NavNode};
use crate::store::{NavIndexTable, NavTreeStore, ToggleMessages};
use std::collections::HashSet;
use waypost_types::AnchorId;

/// Nesting deeper than this is treated as corrupted input. Generated
/// navigation data stays in the single digits.
pub const MAX_DEPTH: usize = 64;

/// One-shot builder for a [`NavTreeStore`].
pub struct NavTreeBuilder {
    root: NavNode,
    index: Vec<AnchorId>,
    sync_on: String,
    sync_off: String,
    known_pages: Option<HashSet<String>>,
}

impl NavTreeBuilder {
    /// Starts a build from a fully-formed root entry.
    pub fn new(root: NavNode) -> Self {
        Self {
            root,
            index: Vec::new(),
            sync_on: String::new(),
            sync_off: String::new(),
            known_pages: None,
        }
    }

    /// Sets the flat anchor index table, in order.
    pub fn index_table(mut self, entries: impl IntoIterator<Item = AnchorId>) -> Self {
        self.index = entries.into_iter().collect();
        self
    }

    /// Sets the two panel-synchronization prompts.
    pub fn toggle_messages(
        mut self,
        sync_on: impl Into<String>,
        sync_off: impl Into<String>,
    ) -> Self {
        self.sync_on = sync_on.into();
        self.sync_off = sync_off.into();
        self
    }

    /// Additionally requires every index-table anchor to reference one of
    /// the given pages. Off by default: the table's entries are opaque and
    /// need not correspond to tree targets.
    pub fn require_resolvable(mut self, pages: impl IntoIterator<Item = String>) -> Self {
        self.known_pages = Some(pages.into_iter().collect());
        self
    }

    /// Validates and assembles the store.
    pub fn build(self) -> Result<NavTreeStore, TreeError> {
        validate_node(&self.root, 0)?;

        if self.index.is_empty() {
            return Err(TreeError::EmptyIndexTable);
        }
        for anchor in &self.index {
            if !anchor.is_valid() {
                return Err(TreeError::InvalidAnchor {
                    anchor: anchor.to_string(),
                    location: "index table".into(),
                });
            }
            if let Some(pages) = &self.known_pages {
                if !pages.contains(anchor.to_page_ref().page()) {
                    return Err(TreeError::UnresolvedAnchor(anchor.to_string()));
                }
            }
        }

        if self.sync_on.is_empty() {
            return Err(TreeError::EmptyToggleMessage("sync on"));
        }
        if self.sync_off.is_empty() {
            return Err(TreeError::EmptyToggleMessage("sync off"));
        }
        if self.sync_on == self.sync_off {
            return Err(TreeError::IndistinctToggleMessages);
        }

        let store = NavTreeStore::new(
            self.root,
            NavIndexTable::new(self.index),
            ToggleMessages::new(self.sync_on, self.sync_off),
        );
        log::debug!(
            "built navigation store: {} nodes, {} index entries",
            store.node_count(),
            store.index_table().len()
        );
        Ok(store)
    }
}

fn validate_node(node: &NavNode, depth: usize) -> Result<(), TreeError> {
    if depth > MAX_DEPTH {
        return Err(TreeError::DepthExceeded { max: MAX_DEPTH });
    }
    if let Some(anchor) = node.target.anchor() {
        if !anchor.is_valid() {
            return Err(TreeError::InvalidAnchor {
                anchor: anchor.to_string(),
                location: format!("entry '{}'", node.label),
            });
        }
    }
    if let NavChildren::Inline(children) = &node.children {
        for child in children {
            validate_node(child, depth + 1)?;
        }
    }
    Ok(())
}
