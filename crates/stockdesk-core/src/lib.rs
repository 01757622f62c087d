//! # stockdesk-core: Pure Domain Logic for Stockdesk
//!
//! This crate is the I/O-free half of Stockdesk. Everything in it is a plain
//! type, a pure function, or a static configuration table.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Stockdesk Architecture                          │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (frontend)               │   │
//! │  │    List view ──► Detail view ──► Create/Edit form           │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │              stockdesk-store (stateful stores)              │   │
//! │  │        ProductStore (CRUD + views) · UiStore (flags)        │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │             ★ stockdesk-core (THIS CRATE) ★                 │   │
//! │  │                                                             │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌───────┐ ┌────────┐ │   │
//! │  │  │  types  │ │  error  │ │validation│ │format │ │nav/    │ │   │
//! │  │  │ Product │ │NotFound │ │  rules   │ │ Rp/id │ │routes  │ │   │
//! │  │  └─────────┘ └─────────┘ └──────────┘ └───────┘ └────────┘ │   │
//! │  │                                                             │   │
//! │  │   NO I/O • NO TIMERS • NO GLOBAL STATE • PURE FUNCTIONS     │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductDraft, ProductPatch)
//! - [`error`] - Domain error types
//! - [`validation`] - Product form validation
//! - [`format`] - Currency, compact-number and date formatting
//! - [`nav`] - Sidebar navigation configuration and active-match rule
//! - [`routes`] - Route table consumed by the router collaborator

pub mod error;
pub mod format;
pub mod nav;
pub mod routes;
pub mod types;
pub mod validation;

// Re-exports for convenience: `use stockdesk_core::Product` instead of
// `use stockdesk_core::types::Product`.
pub use error::{FormErrors, StoreError, StoreResult, ValidationError};
pub use types::{NotificationLevel, Product, ProductDraft, ProductPatch};

/// Threshold used when a product carries no explicit `min_stock`.
///
/// ## Why a constant?
/// The original data set leaves `min_stock` unset on some records. Every
/// read path that needs a threshold goes through
/// [`Product::min_stock_or_default`], which falls back to this value. The
/// default is never written back into a record.
pub const DEFAULT_MIN_STOCK: i64 = 10;

/// How long a notification stays visible before it auto-dismisses.
pub const NOTIFICATION_DISMISS_MS: u64 = 3_000;
