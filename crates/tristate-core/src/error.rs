//! Error types for tristate-core.

use thiserror::Error;

/// Errors raised while building render output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Host element tag is not a valid HTML tag name.
    #[error("invalid element tag: {0:?}")]
    InvalidTag(String),

    /// Attribute name is not valid markup.
    #[error("invalid attribute name: {0:?}")]
    InvalidAttribute(String),
}

/// Result alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
