//! Error types for project export.

use thiserror::Error;

/// Result type alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while assembling or writing a project.
///
/// None of these are reachable from well-formed input; they surface
/// internal failures so callers can report them.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive error.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// A file expected in the generated set is absent.
    #[error("Generated project is missing {0}")]
    MissingFile(String),
}
