//! Navigation Tree Model
//! This crate defines the in-memory representation of a documentation
//! site's navigation data: the table-of-contents tree, the flat anchor
//! index table used for pagination, and the panel-synchronization toggle
//! messages, all bundled in an immutable [`NavTreeStore`].

pub mod builder;
pub mod error;
pub mod node;
pub mod store;

// --- Public API ---
pub use builder::NavTreeBuilder;
pub use error::TreeError;
pub use node::{NavChildren, NavNode, NavTarget};
pub use store::{NavIndexTable, NavTreeStore, PreOrder, ToggleMessages};
