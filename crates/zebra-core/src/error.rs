//! Error types for zebra-core.

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The identifier was empty.
    #[error("identifier is empty")]
    Empty,

    /// The identifier contains a character that cannot appear in a request path.
    #[error("invalid character in identifier: {id:?}")]
    InvalidCharacter {
        /// The rejected identifier.
        id: String,
    },

    /// The identifier is or contains a `.`/`..` path segment.
    #[error("identifier would be read as a path segment: {id:?}")]
    DotSegment {
        /// The rejected identifier.
        id: String,
    },
}
