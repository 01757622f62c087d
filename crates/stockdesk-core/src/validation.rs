//! # Validation Module
//!
//! Product form validation for Stockdesk.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Frontend form                                             │
//! │  ├── Immediate per-field feedback while typing                      │
//! │  └── Calls the per-field validators below                           │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Submit                                                    │
//! │  └── THIS MODULE: validate_product_form over the whole draft        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Store                                                     │
//! │  └── Does NOT re-validate; create() trusts a validated draft        │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockdesk_core::types::ProductDraft;
//! use stockdesk_core::validation::validate_product_form;
//!
//! let draft = ProductDraft {
//!     name: "USB-C Hub".to_string(),
//!     price: 450_000,
//!     stock: 80,
//!     category: "Accessories".to_string(),
//!     ..Default::default()
//! };
//! assert!(validate_product_form(&draft).is_ok());
//! ```

use crate::error::{FormErrors, ValidationError};
use crate::types::ProductDraft;

/// Result type for single-field validation.
pub type ValidationResult = Result<(), ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required text field.
///
/// ## Rules
/// - Must not be empty or whitespace-only
fn validate_required(field: &str, value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a product name.
pub fn validate_name(name: &str) -> ValidationResult {
    validate_required("name", name)
}

/// Validates a category name.
pub fn validate_category(category: &str) -> ValidationResult {
    validate_required("category", category)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price.
///
/// ## Rules
/// - Must be strictly greater than 0 (free products are not a thing here)
///
/// ## Example
/// ```rust
/// use stockdesk_core::validation::validate_price;
///
/// assert!(validate_price(250_000).is_ok());
/// assert!(validate_price(0).is_err());
/// assert!(validate_price(-100).is_err());
/// ```
pub fn validate_price(price: i64) -> ValidationResult {
    if price <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates a stock level.
///
/// ## Rules
/// - Must be non-negative; zero is allowed (out of stock)
pub fn validate_stock(stock: i64) -> ValidationResult {
    if stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "stock".to_string(),
        });
    }
    Ok(())
}

/// Validates a minimum-stock threshold.
///
/// ## Rules
/// - Must be non-negative
/// - When a current stock level is supplied, the threshold must not exceed
///   it (a warning threshold above what you hold is always firing)
pub fn validate_min_stock(min_stock: i64, current_stock: Option<i64>) -> ValidationResult {
    if min_stock < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "minStock".to_string(),
        });
    }

    if let Some(stock) = current_stock {
        if min_stock > stock {
            return Err(ValidationError::MinStockExceedsStock);
        }
    }

    Ok(())
}

// =============================================================================
// Form Validator
// =============================================================================

/// Validates a whole create/edit form.
///
/// Checks name, price, stock, category, and - only when the caller supplied
/// one - the minimum-stock threshold. An absent `min_stock` is simply not
/// validated; the default of 10 is a read-side fallback, never a value this
/// layer injects.
///
/// ## Returns
/// - `Ok(())` when every rule passes
/// - `Err(FormErrors)` mapping each failing field to its message
pub fn validate_product_form(draft: &ProductDraft) -> Result<(), FormErrors> {
    let mut errors = FormErrors::new();

    if let Err(e) = validate_name(&draft.name) {
        errors.push(e);
    }
    if let Err(e) = validate_price(draft.price) {
        errors.push(e);
    }
    if let Err(e) = validate_stock(draft.stock) {
        errors.push(e);
    }
    if let Some(min_stock) = draft.min_stock {
        if let Err(e) = validate_min_stock(min_stock, Some(draft.stock)) {
            errors.push(e);
        }
    }
    if let Err(e) = validate_category(&draft.category) {
        errors.push(e);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProductDraft {
        ProductDraft {
            name: "Mechanical Keyboard".to_string(),
            description: Some("RGB mechanical keyboard".to_string()),
            price: 1_200_000,
            stock: 45,
            min_stock: Some(20),
            category: "Accessories".to_string(),
            sku: "KEY-MEC-RGB-001".to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert!(validate_product_form(&valid_draft()).is_ok());
    }

    #[test]
    fn test_name_required() {
        assert!(validate_name("Laptop Stand").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }

    #[test]
    fn test_price_must_be_positive() {
        assert!(validate_price(1).is_ok());
        assert!(validate_price(0).is_err());
        assert!(validate_price(-250_000).is_err());
    }

    #[test]
    fn test_stock_allows_zero() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(150).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_min_stock_bounded_by_current_stock() {
        assert!(validate_min_stock(10, Some(45)).is_ok());
        assert!(validate_min_stock(45, Some(45)).is_ok());
        assert!(validate_min_stock(50, Some(45)).is_err());
        assert!(validate_min_stock(-5, None).is_err());
        // Without a current stock level only the sign rule applies.
        assert!(validate_min_stock(9_999, None).is_ok());
    }

    #[test]
    fn test_form_errors_map_fields_to_messages() {
        let draft = ProductDraft {
            name: "".to_string(),
            price: 0,
            stock: -3,
            category: "".to_string(),
            ..Default::default()
        };

        let errors = validate_product_form(&draft).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("name"), Some("This field is required"));
        assert_eq!(errors.get("price"), Some("price must be greater than 0"));
        assert_eq!(errors.get("stock"), Some("stock cannot be negative"));
        assert_eq!(errors.get("category"), Some("This field is required"));
    }

    #[test]
    fn test_absent_min_stock_is_not_validated() {
        let mut draft = valid_draft();
        draft.min_stock = None;
        assert!(validate_product_form(&draft).is_ok());
    }

    #[test]
    fn test_min_stock_above_stock_fails_form() {
        let mut draft = valid_draft();
        draft.stock = 5;
        draft.min_stock = Some(20);

        let errors = validate_product_form(&draft).unwrap_err();
        assert_eq!(
            errors.get("minStock"),
            Some("Minimum stock cannot be greater than current stock")
        );
    }
}
