//! # API Error Type
//!
//! Unified error type for backoffice commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Backoffice                         │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('save_quotation')                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Validation Error? ── ValidationError::Required ──┐              │  │
//! │  │         │                                         ▼              │  │
//! │  │  Store Error? ─────── StoreError::NotFound ───── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │  Editor closed? ───── EditorError ───────────────┘              │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  try {                                                                  │
//! │    await invoke('save_quotation')                                       │
//! │  } catch (e) {                                                          │
//! │    // e.message = "toCompany is required"                               │
//! │    // e.code = "VALIDATION_ERROR" → blocking alert, dialog stays open   │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every "error" here is a synchronous local rejection surfaced to the user;
//! there is no recoverable/fatal split because nothing talks to a remote
//! service.

use serde::Serialize;
use thiserror::Error;

use jseven_core::{CoreError, ValidationError};
use jseven_export::ExportError;
use jseven_store::StoreError;

/// API error returned from backoffice commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "quotation not found: QTN-999"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed; the dialog stays open
    ValidationError,

    /// Dialog state machine violation (open while open, edit while closed)
    EditorError,

    /// Export artifact could not be written
    ExportError,

    /// Anything unexpected
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an editor state machine error.
    pub fn editor(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::EditorError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound { id } => {
                ApiError::not_found("Line item", &id.to_string())
            }
            CoreError::SectionFull { .. } => ApiError::validation(err.to_string()),
            CoreError::Validation(inner) => inner.into(),
        }
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => ApiError::not_found(entity, &id),
            StoreError::Duplicate { .. } => ApiError::validation(err.to_string()),
            StoreError::Validation(inner) => inner.into(),
        }
    }
}

/// Converts export errors to API errors.
impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        // Log the underlying cause but keep the surface message short
        tracing::error!("Export failed: {}", err);
        ApiError::new(ErrorCode::ExportError, "Export failed")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
