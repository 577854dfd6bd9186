//! # Export Error Types
//!
//! The only failures here are artifact write failures from the underlying
//! writer. Absence of line items is NOT an error: an empty document
//! exports as an empty artifact.

use thiserror::Error;

/// Export operation errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The CSV writer failed (underlying I/O or serialization failure).
    #[error("CSV write failed: {0}")]
    Csv(#[from] ::csv::Error),

    /// The finished artifact could not be handed back from the writer.
    #[error("Artifact write failed: {0}")]
    Write(String),
}

/// Convenience type alias for Results with ExportError.
pub type ExportResult<T> = Result<T, ExportError>;
