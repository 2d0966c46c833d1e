//! Error types for the Blueprint data model.

use thiserror::Error;

/// Result type alias for data model operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while loading or checking a component tree or configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Two nodes in the same tree share an identifier.
    #[error("Duplicate component id: {id}")]
    DuplicateId { id: String },

    /// The package identifier is not a reverse-domain name.
    #[error("Invalid package identifier '{value}': expected reverse-domain form such as com.example.app")]
    InvalidPackageName { value: String },

    /// A project document could not be decoded.
    #[error("Invalid project document: {0}")]
    Json(#[from] serde_json::Error),
}
