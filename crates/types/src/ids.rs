//! Newtype wrappers for navigation identifiers
//!
//! These types provide compile-time type safety to prevent mixing up the
//! different kinds of string references a navigation data set contains
//! (page anchors, sub-index names).

use serde::{Serialize, Serializer};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// An identifier referencing a documentation page or an in-page location,
/// e.g. `files.html` or `index.html#autotoc_md7`.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct AnchorId(Arc<str>);

impl AnchorId {
    /// Creates a new AnchorId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this anchor ID
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Checks that this anchor is syntactically well-formed: non-empty,
    /// contains no whitespace, has at most one `#`, and the page part
    /// before the `#` is non-empty.
    pub fn is_valid(&self) -> bool {
        if self.0.is_empty() || self.0.chars().any(char::is_whitespace) {
            return false;
        }
        match self.0.split_once('#') {
            Some((page, fragment)) => !page.is_empty() && !fragment.contains('#'),
            None => true,
        }
    }

    /// Splits this anchor into its page and optional fragment parts.
    pub fn to_page_ref(&self) -> PageRef {
        match self.0.split_once('#') {
            Some((page, fragment)) => PageRef {
                page: page.into(),
                fragment: Some(fragment.into()),
            },
            None => PageRef {
                page: self.0.clone(),
                fragment: None,
            },
        }
    }
}

impl From<String> for AnchorId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for AnchorId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<Arc<str>> for AnchorId {
    fn from(s: Arc<str>) -> Self {
        Self(s)
    }
}

impl AsRef<str> for AnchorId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnchorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for AnchorId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// A parsed anchor reference: the page it points at, and the in-page
/// fragment if one was given.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PageRef {
    page: Arc<str>,
    fragment: Option<Arc<str>>,
}

impl PageRef {
    /// Parses an anchor string of the form `page` or `page#fragment`.
    pub fn parse(anchor: &str) -> Self {
        AnchorId::from(anchor).to_page_ref()
    }

    /// The page part of the reference.
    pub fn page(&self) -> &str {
        &self.page
    }

    /// The in-page fragment, if any.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(f, "{}#{}", self.page, fragment),
            None => write!(f, "{}", self.page),
        }
    }
}

/// The name of an external sub-index: another generated navigation data
/// file a branch defers its children to (e.g. `modules`, `annotated_dup`).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SubIndexRef(Arc<str>);

impl SubIndexRef {
    /// Creates a new SubIndexRef from a string
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the string representation of this sub-index name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SubIndexRef {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for SubIndexRef {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl AsRef<str> for SubIndexRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubIndexRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for SubIndexRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_id_creation() {
        let id1 = AnchorId::new("files.html");
        let id2 = AnchorId::from("files.html");
        let id3 = AnchorId::from(String::from("files.html"));

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1.as_str(), "files.html");
    }

    #[test]
    fn test_anchor_validity() {
        assert!(AnchorId::new("index.html").is_valid());
        assert!(AnchorId::new("index.html#autotoc_md7").is_valid());

        assert!(!AnchorId::new("").is_valid());
        assert!(!AnchorId::new("a page.html").is_valid());
        assert!(!AnchorId::new("#autotoc_md7").is_valid());
        assert!(!AnchorId::new("a.html#b#c").is_valid());
    }

    #[test]
    fn test_page_ref_round_trip() {
        let plain = PageRef::parse("annotated.html");
        assert_eq!(plain.page(), "annotated.html");
        assert_eq!(plain.fragment(), None);
        assert_eq!(plain.to_string(), "annotated.html");

        let with_fragment = PageRef::parse("index.html#autotoc_md8");
        assert_eq!(with_fragment.page(), "index.html");
        assert_eq!(with_fragment.fragment(), Some("autotoc_md8"));
        assert_eq!(with_fragment.to_string(), "index.html#autotoc_md8");
    }

    #[test]
    fn test_type_safety() {
        // Different types even though they wrap the same underlying string.
        let anchor = AnchorId::new("modules");
        let sub_index = SubIndexRef::new("modules");

        // This line would not compile:
        // let _: bool = anchor == sub_index;

        assert_eq!(anchor.as_str(), sub_index.as_str());
    }

    #[test]
    fn test_hash_map_usage() {
        use std::collections::HashMap;

        let mut anchors = HashMap::new();
        anchors.insert(AnchorId::new("annotated.html"), 0);
        anchors.insert(AnchorId::new("classes.html"), 1);

        assert_eq!(anchors.get(&AnchorId::new("annotated.html")), Some(&0));
    }
}
