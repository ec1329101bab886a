//! Waypost holds the navigation data of a generated documentation site —
//! the table-of-contents tree, the flat anchor index table, and the
//! panel-synchronization toggle messages — in an immutable store a viewer
//! component reads from.
//!
//! The store is built once at load time, either from a generated
//! JavaScript navigation data file via [`load_store`], or programmatically
//! via [`NavTreeBuilder`]. After that it is read-only and freely shared
//! between threads.

pub mod builtin;
mod loader;

pub use loader::{LoadError, load_store};

// Re-export the member crates' public types.
pub use waypost_navjs::{NavData, NavJsError, parse_navtree_js};
pub use waypost_tree::{
    NavChildren, NavIndexTable, NavNode, NavTarget, NavTreeBuilder, NavTreeStore, PreOrder,
    ToggleMessages, TreeError,
};
pub use waypost_types::{AnchorId, PageRef, SubIndexRef};
