//! # Store Error Types
//!
//! Error types for repository operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationError (jseven-core)                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds entity/id context                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in backoffice app) ← Serialized for frontend                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Frontend displays user-friendly message                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use jseven_core::ValidationError;

/// Repository operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in the store.
    ///
    /// ## When This Occurs
    /// - Getting or updating a quote number that was deleted
    /// - Editing a client/supplier/material id that doesn't exist
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A business key collided.
    ///
    /// ## When This Occurs
    /// - Saving a document under a quote number that belongs to a
    ///   different document id
    #[error("Duplicate {field}: '{value}' already exists")]
    Duplicate { field: &'static str, value: String },

    /// Record rejected by validation; nothing was stored.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::NotFound {
            entity: "quotation",
            id: "QTN-999".to_string(),
        };
        assert_eq!(err.to_string(), "quotation not found: QTN-999");
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let err: StoreError = ValidationError::Required {
            field: "email".to_string(),
        }
        .into();
        assert!(matches!(err, StoreError::Validation(_)));
    }
}
