use thiserror::Error;

/// Errors reported by build-time validation of a navigation data set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("Index table is empty")]
    EmptyIndexTable,

    #[error("Malformed anchor '{anchor}' in {location}")]
    InvalidAnchor { anchor: String, location: String },

    #[error("Index table anchor '{0}' does not resolve to a known page")]
    UnresolvedAnchor(String),

    #[error("Toggle message for '{0}' is empty")]
    EmptyToggleMessage(&'static str),

    #[error("The two toggle messages must be distinct")]
    IndistinctToggleMessages,

    #[error("Tree depth exceeds the maximum of {max}")]
    DepthExceeded { max: usize },
}
