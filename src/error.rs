//! Error types for object name construction
//!
//! Parsing and caching never fail; only building an `ObjectName` from raw
//! text can be rejected.

use thiserror::Error;

// == Identity Error Enum ==
/// Errors raised while turning text into an `ObjectName`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// No `:` separates the domain from the key properties
    #[error("Missing domain separator in object name: {0}")]
    MissingDomainSeparator(String),

    /// Nothing follows the domain separator
    #[error("Empty key property list in object name: {0}")]
    EmptyKeyPropertyList(String),

    /// The domain contains a wildcard
    #[error("Object name is a pattern: {0}")]
    Pattern(String),
}

// == Result Type Alias ==
/// Convenience Result type for identity construction.
pub type Result<T> = std::result::Result<T, IdentityError>;
