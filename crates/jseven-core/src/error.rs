//! # Error Types
//!
//! Domain-specific error types for jseven-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  jseven-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  jseven-store errors (separate crate)                                  │
//! │  └── StoreError       - Repository operation failures                  │
//! │                                                                         │
//! │  jseven-export errors (separate crate)                                 │
//! │  └── ExportError      - Artifact write failures                        │
//! │                                                                         │
//! │  Backoffice API errors (in app)                                        │
//! │  └── ApiError         - What the frontend sees (serialized)            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Frontend  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, id, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A line item cannot be found in its section.
    ///
    /// ## When This Occurs
    /// - Editing an item by an id that was never assigned
    /// - Editing an item that was already removed
    ///
    /// Note: *removing* an unknown id is a no-op, not an error. Only edits
    /// require the addressed item to exist.
    #[error("Line item not found: {id}")]
    ItemNotFound { id: u32 },

    /// A section has reached its maximum number of line items.
    #[error("Section cannot have more than {max} items")]
    SectionFull { max: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Text could not be parsed as a number.
    ///
    /// ## When This Occurs
    /// Quantity and unit-cost inputs are free text at the UI boundary.
    /// Parsing is strict: empty strings and non-numeric text are rejected
    /// here instead of being silently coerced to zero.
    #[error("{field} is not a valid number: '{value}'")]
    InvalidNumber { field: String, value: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid hex color, invalid email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ItemNotFound { id: 42 };
        assert_eq!(err.to_string(), "Line item not found: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "toCompany".to_string(),
        };
        assert_eq!(err.to_string(), "toCompany is required");

        let err = ValidationError::InvalidNumber {
            field: "quantity".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "quantity is not a valid number: 'abc'");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
