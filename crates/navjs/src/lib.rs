//! Parser for the JavaScript navigation data files a documentation
//! generator emits alongside its HTML output.
//!
//! A file declares four variables, in any order: `NAVTREE` (the nested
//! table-of-contents array), `NAVTREEINDEX` (the flat anchor table), and
//! `SYNCONMSG`/`SYNCOFFMSG` (the panel-synchronization prompts). This
//! crate turns one such file into the raw pieces a
//! [`waypost_tree::NavTreeBuilder`] assembles into a store.

pub mod error;
mod parser;

// --- Public API ---
pub use error::NavJsError;
pub use parser::{NavData, parse_navtree_js};
