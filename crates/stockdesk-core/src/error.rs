//! # Error Types
//!
//! Domain-specific error types for Stockdesk.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  stockdesk-core errors (this file)                                  │
//! │  ├── StoreError       - Store operation failures (NotFound)         │
//! │  ├── ValidationError  - A single field failing a rule               │
//! │  └── FormErrors       - field name → message map for a whole form   │
//! │                                                                     │
//! │  Flow: ValidationError → FormErrors → StoreError → presentation     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never bare Strings
//! 3. Every failure is terminal for its call: the store never retries and
//!    never rolls back (merges are single-step replacement)

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Errors surfaced by the product store.
///
/// Only two kinds of failure exist in this design: a mutation aimed at an
/// id that is not in the collection, and a form that failed validation
/// before it ever reached the store.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Update/delete target absent from the collection.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Form validation failed (wraps the per-field map).
    #[error("Validation failed: {0}")]
    Validation(#[from] FormErrors),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single field failing a validation rule.
///
/// The message text matches what the form renders next to the field, so
/// `to_string()` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("This field is required")]
    Required { field: String },

    /// Value must be strictly positive (price).
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Value must not be negative (stock, minimum stock).
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },

    /// Minimum stock cannot exceed the current stock level.
    #[error("Minimum stock cannot be greater than current stock")]
    MinStockExceedsStock,
}

impl ValidationError {
    /// The form field this error belongs to, used as the key in
    /// [`FormErrors`].
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::MustBePositive { field }
            | ValidationError::MustBeNonNegative { field } => field,
            ValidationError::MinStockExceedsStock => "minStock",
        }
    }
}

// =============================================================================
// Form Errors
// =============================================================================

/// Validation outcome for a whole form: field name → user-facing message.
///
/// The presentation layer renders each message next to its field, so this
/// is a mapping rather than a single error value. Keys use the frontend's
/// camelCase field names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors {
    errors: BTreeMap<String, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for its field. A later failure for the same field
    /// is ignored: the first rule to fail is the one shown.
    pub fn push(&mut self, error: ValidationError) {
        self.errors
            .entry(error.field().to_string())
            .or_insert_with(|| error.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a single field, if that field failed.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.keys().map(String::as_str).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for FormErrors {}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::NotFound("42".to_string());
        assert_eq!(err.to_string(), "Product not found: 42");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "This field is required");
        assert_eq!(err.field(), "name");

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be greater than 0");
    }

    #[test]
    fn test_form_errors_keep_first_failure_per_field() {
        let mut errors = FormErrors::new();
        errors.push(ValidationError::Required {
            field: "price".to_string(),
        });
        errors.push(ValidationError::MustBePositive {
            field: "price".to_string(),
        });

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("price"), Some("This field is required"));
    }

    #[test]
    fn test_form_errors_convert_to_store_error() {
        let mut errors = FormErrors::new();
        errors.push(ValidationError::MinStockExceedsStock);

        let err: StoreError = errors.into();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(err.to_string().contains("minStock"));
    }
}
