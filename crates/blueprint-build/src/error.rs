//! Error types for the build simulation.

use blueprint_codegen::ExportError;
use blueprint_core::CoreError;
use thiserror::Error;

/// Result type alias for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Reasons a simulated build reports failure.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The configuration was rejected before the first stage.
    #[error(transparent)]
    Config(#[from] CoreError),

    /// Project assembly failed after the last stage.
    #[error(transparent)]
    Export(#[from] ExportError),
}
