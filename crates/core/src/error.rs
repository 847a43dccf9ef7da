//! Domain-level error type shared across the workspace.

use thiserror::Error;

/// Domain errors surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
