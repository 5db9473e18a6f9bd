//! Error types for rs-domext.
//!
//! Almost every operation in this crate degrades silently instead of failing.
//! The variants below cover the few cases that are surfaced to callers.

/// Error type for tree operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The selector string could not be parsed by the host tree.
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    /// The node has no parent, so it cannot be replaced in place.
    #[error("Node is detached from the tree")]
    Detached,
}

/// Result type alias for tree operations.
pub type Result<T> = std::result::Result<T, Error>;
