use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavJsError {
    #[error("Parse error near '{snippet}': {message}")]
    Parse { snippet: String, message: String },

    #[error("Missing declaration 'var {0}'")]
    MissingDeclaration(&'static str),

    #[error("Duplicate declaration 'var {0}'")]
    DuplicateDeclaration(&'static str),

    #[error("NAVTREE must declare exactly one root entry, found {0}")]
    RootCount(usize),
}
