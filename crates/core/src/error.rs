//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// bad identifiers, missing records). Presentation concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed form input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced record does not exist (any more).
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// The human-readable message without the category prefix.
    ///
    /// This is what a form shows in its error banner.
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::InvalidId(msg)
            | Self::NotFound(msg) => msg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_category_prefix() {
        let err = DomainError::validation("price must be positive");
        assert_eq!(err.to_string(), "validation failed: price must be positive");
        assert_eq!(err.detail(), "price must be positive");
    }

    #[test]
    fn not_found_detail_is_the_message() {
        let err = DomainError::not_found("product 42");
        assert_eq!(err.detail(), "product 42");
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
