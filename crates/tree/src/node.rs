//! The navigation tree node types.
//!
//! A node is a (label, target, children) triple. The children slot is a
//! tagged variant rather than a plain list because the generated data
//! format allows a branch to defer its children to an external sub-index
//! file instead of declaring them inline.

use serde::{Serialize, Serializer};
use serde::ser::SerializeSeq;
use waypost_types::{AnchorId, SubIndexRef};

/// A string type for node labels.
pub type LabelStr = String;

/// Where a navigation entry links to when activated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NavTarget {
    /// The entry is a pure grouping heading with no link.
    #[default]
    None,
    /// The entry links to a page or in-page anchor.
    Page(AnchorId),
}

impl NavTarget {
    /// Returns the link anchor, if the entry has one.
    pub fn anchor(&self) -> Option<&AnchorId> {
        match self {
            NavTarget::None => None,
            NavTarget::Page(anchor) => Some(anchor),
        }
    }
}

/// The children slot of a navigation entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NavChildren {
    /// A leaf entry.
    #[default]
    None,
    /// Children declared inline, in display order.
    Inline(Vec<NavNode>),
    /// Children live in a separately generated sub-index file.
    External(SubIndexRef),
}

impl NavChildren {
    pub fn is_none(&self) -> bool {
        matches!(self, NavChildren::None)
    }
}

/// One entry in the documentation navigation tree.
///
/// Child order is display order (top to bottom in the side panel) and is
/// significant. The tree is finite and acyclic by construction: children
/// are owned, so no back-references can exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavNode {
    /// The text shown in the navigation panel.
    pub label: LabelStr,
    /// The link activated by selecting the entry.
    pub target: NavTarget,
    /// Nested entries, if any.
    #[serde(skip_serializing_if = "NavChildren::is_none")]
    pub children: NavChildren,
}

impl NavNode {
    /// Creates a leaf entry.
    pub fn leaf(label: impl Into<LabelStr>, target: NavTarget) -> Self {
        Self {
            label: label.into(),
            target,
            children: NavChildren::None,
        }
    }

    /// Creates an entry with inline children.
    pub fn branch(
        label: impl Into<LabelStr>,
        target: NavTarget,
        children: Vec<NavNode>,
    ) -> Self {
        Self {
            label: label.into(),
            target,
            children: NavChildren::Inline(children),
        }
    }

    /// Creates an entry whose children live in an external sub-index.
    pub fn external(
        label: impl Into<LabelStr>,
        target: NavTarget,
        sub_index: impl Into<SubIndexRef>,
    ) -> Self {
        Self {
            label: label.into(),
            target,
            children: NavChildren::External(sub_index.into()),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn has_external_index(&self) -> bool {
        matches!(self.children, NavChildren::External(_))
    }

    /// Returns the inline children as a slice; empty for leaves and for
    /// entries that defer to an external sub-index.
    pub fn inline_children(&self) -> &[NavNode] {
        match &self.children {
            NavChildren::Inline(children) => children,
            _ => &[],
        }
    }

    /// Returns the external sub-index name, if the entry defers to one.
    pub fn sub_index(&self) -> Option<&SubIndexRef> {
        match &self.children {
            NavChildren::External(sub_index) => Some(sub_index),
            _ => None,
        }
    }
}

// Targets serialize as the anchor string or null, children as a nested
// list or the sub-index name, matching the layout a viewer frontend
// expects from the generated data format.

impl Serialize for NavTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NavTarget::None => serializer.serialize_none(),
            NavTarget::Page(anchor) => anchor.serialize(serializer),
        }
    }
}

impl Serialize for NavChildren {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NavChildren::None => serializer.serialize_none(),
            NavChildren::Inline(children) => {
                let mut seq = serializer.serialize_seq(Some(children.len()))?;
                for child in children {
                    seq.serialize_element(child)?;
                }
                seq.end()
            }
            NavChildren::External(sub_index) => sub_index.serialize(serializer),
        }
    }
}
