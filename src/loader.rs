//! One-call loading: parse a navigation data file, validate it, and
//! assemble the store.

use thiserror::Error;
use waypost_navjs::{NavJsError, parse_navtree_js};
use waypost_tree::{NavTreeBuilder, NavTreeStore, TreeError};

/// Errors that can occur while loading a navigation data file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Navigation data parse error: {0}")]
    Parse(#[from] NavJsError),

    #[error("Navigation tree validation error: {0}")]
    Tree(#[from] TreeError),
}

/// Parses the given navigation data source and builds a validated store.
pub fn load_store(source: &str) -> Result<NavTreeStore, LoadError> {
    let data = parse_navtree_js(source)?;
    log::debug!(
        "parsed navigation data: root '{}', {} index entries",
        data.root.label,
        data.index.len()
    );
    let store = NavTreeBuilder::new(data.root)
        .index_table(data.index)
        .toggle_messages(data.sync_on, data.sync_off)
        .build()?;
    Ok(store)
}
