//! # Domain Types
//!
//! Core domain types used throughout Stockdesk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐    │
//! │  │    Product      │   │  ProductDraft   │   │  ProductPatch   │    │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │    │
//! │  │  id (UUID)      │   │  create input:  │   │  update input:  │    │
//! │  │  name, sku      │   │  all fields the │   │  every field    │    │
//! │  │  price, stock   │   │  caller supplies│   │  optional       │    │
//! │  │  timestamps     │   │  (no id/dates)  │   │  (shallow merge)│    │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `Product.id` is immutable after creation. Seeded records keep their short
//! fixture ids; records created at runtime get a UUID v4.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::DEFAULT_MIN_STOCK;

// =============================================================================
// Product
// =============================================================================

/// A product held in the inventory collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier, immutable after creation.
    pub id: String,

    /// Display name shown in the list and detail views.
    pub name: String,

    /// Optional longer description.
    pub description: Option<String>,

    /// Price in whole rupiah. Validation requires > 0.
    pub price: i64,

    /// Current stock level (never negative).
    pub stock: i64,

    /// Low-stock threshold. `None` means "use the default of 10".
    pub min_stock: Option<i64>,

    /// Category name, matched exactly (case-sensitive) by the category view.
    pub category: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// When the product was created. Set once, never changed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated. Refreshed on every mutation.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the effective low-stock threshold.
    ///
    /// The default of [`DEFAULT_MIN_STOCK`] applies uniformly wherever a
    /// threshold is needed; an absent `min_stock` is never materialized
    /// into the record.
    #[inline]
    pub fn min_stock_or_default(&self) -> i64 {
        self.min_stock.unwrap_or(DEFAULT_MIN_STOCK)
    }

    /// A product is low on stock iff `stock < min_stock_or_default()`.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.stock < self.min_stock_or_default()
    }

    /// Out of stock is the degenerate case of low stock with nothing left.
    #[inline]
    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    /// Applies a partial update to this record.
    ///
    /// ## Merge Semantics
    /// Explicit field-by-field copy-with-override: a `Some` field in the
    /// patch overwrites, a `None` field retains the current value. `id`,
    /// `created_at` and `updated_at` are untouched here; the store owns
    /// timestamp refresh.
    ///
    /// Optional record fields (`description`, `min_stock`) can be replaced
    /// through a patch but not cleared.
    pub fn apply_patch(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(min_stock) = patch.min_stock {
            self.min_stock = Some(min_stock);
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(sku) = &patch.sku {
            self.sku = sku.clone();
        }
    }
}

// =============================================================================
// Product Draft (create input)
// =============================================================================

/// Caller-supplied fields for creating a product.
///
/// The store generates `id`, `created_at` and `updated_at` itself. Field
/// presence is NOT enforced here - that is the job of
/// [`crate::validation::validate_product_form`], which the presentation
/// layer runs before calling the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductDraft {
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock: i64,
    pub min_stock: Option<i64>,
    pub category: String,
    pub sku: String,
}

// =============================================================================
// Product Patch (update input)
// =============================================================================

/// Partial update for an existing product. Every field is optional;
/// see [`Product::apply_patch`] for the merge rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub stock: Option<i64>,
    pub min_stock: Option<i64>,
    pub category: Option<String>,
    pub sku: Option<String>,
}

// =============================================================================
// Notification Level
// =============================================================================

/// Severity of a UI notification banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl Default for NotificationLevel {
    fn default() -> Self {
        NotificationLevel::Info
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_product() -> Product {
        Product {
            id: "p-1".to_string(),
            name: "Wireless Mouse".to_string(),
            description: Some("Ergonomic wireless mouse".to_string()),
            price: 250_000,
            stock: 150,
            min_stock: Some(50),
            category: "Accessories".to_string(),
            sku: "MOU-WLS-001".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 16, 10, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 16, 10, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_min_stock_defaults_to_ten_when_absent() {
        let mut product = sample_product();
        product.min_stock = None;
        assert_eq!(product.min_stock_or_default(), DEFAULT_MIN_STOCK);

        product.stock = 9;
        assert!(product.is_low_stock());
        product.stock = 10;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn test_low_stock_uses_explicit_threshold() {
        let mut product = sample_product();
        product.min_stock = Some(5);
        product.stock = 2;
        assert!(product.is_low_stock());

        product.stock = 5;
        assert!(!product.is_low_stock());
    }

    #[test]
    fn test_out_of_stock_is_low_stock() {
        let mut product = sample_product();
        product.stock = 0;
        assert!(product.is_out_of_stock());
        assert!(product.is_low_stock());
    }

    #[test]
    fn test_apply_patch_overwrites_provided_fields_only() {
        let mut product = sample_product();
        let before = product.clone();

        product.apply_patch(&ProductPatch {
            price: Some(300_000),
            stock: Some(120),
            ..Default::default()
        });

        assert_eq!(product.price, 300_000);
        assert_eq!(product.stock, 120);
        // Everything not mentioned in the patch is retained.
        assert_eq!(product.name, before.name);
        assert_eq!(product.description, before.description);
        assert_eq!(product.min_stock, before.min_stock);
        assert_eq!(product.category, before.category);
        assert_eq!(product.sku, before.sku);
        assert_eq!(product.id, before.id);
        assert_eq!(product.created_at, before.created_at);
    }

    #[test]
    fn test_serde_uses_camel_case_field_names() {
        let json = serde_json::to_value(sample_product()).unwrap();
        assert!(json.get("minStock").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("min_stock").is_none());
    }
}
