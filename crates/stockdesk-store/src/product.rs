//! # Product Store
//!
//! Owns the canonical in-memory product collection and the single
//! "selected product" reference used by the detail/edit views.
//!
//! ## Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Product Store Operations                         │
//! │                                                                     │
//! │  Frontend Action          Store Call            State Change        │
//! │  ───────────────          ──────────            ────────────        │
//! │                                                                     │
//! │  Open list ──────────────► load()       ──────► products = seeded   │
//! │                            (async, 500-1000ms)  (newest first)      │
//! │                                                                     │
//! │  Open detail ────────────► get(id)      ──────► selected = found    │
//! │                            (async, 300-600ms)                       │
//! │                                                                     │
//! │  Submit create form ─────► create(draft) ─────► head insert         │
//! │                                                                     │
//! │  Submit edit form ───────► update(id, patch) ─► field merge         │
//! │                                                                     │
//! │  Confirm delete ─────────► delete(id)   ──────► strict removal      │
//! │                                                                     │
//! │  NOTE: latency waits happen OUTSIDE the lock. Mutations are         │
//! │        synchronous single-step replacements under the lock, so      │
//! │        there is nothing to roll back on failure.                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering Invariant
//! The collection is newest-first by `created_at`: `load()` sorts once,
//! `create()` inserts at the head. No other operation reorders.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeDelta, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::fixtures;
use crate::latency::StoreLatency;
use stockdesk_core::{Product, ProductDraft, ProductPatch, StoreError, StoreResult};

// =============================================================================
// State
// =============================================================================

#[derive(Debug, Default)]
struct ProductState {
    /// Canonical collection, newest first.
    products: Vec<Product>,

    /// At most one record in focus for the detail/edit views. Held as a
    /// copy; mutations that touch the focused record refresh it.
    selected: Option<Product>,

    /// True while a simulated backend call is in flight.
    loading: bool,
}

/// The product data store.
///
/// ## Thread Safety
/// `Arc<Mutex<_>>` because the presentation layer may call in from
/// concurrent tasks. Every operation is a logically atomic mutation of the
/// one collection; a single mutex is the whole concurrency story.
#[derive(Debug, Clone)]
pub struct ProductStore {
    state: Arc<Mutex<ProductState>>,
    latency: StoreLatency,
}

impl ProductStore {
    /// Creates an empty store with the given latency profile. Use
    /// [`StoreLatency::none`] in tests.
    pub fn new(latency: StoreLatency) -> Self {
        ProductStore {
            state: Arc::new(Mutex::new(ProductState::default())),
            latency,
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ProductState> {
        self.state.lock().expect("product store mutex poisoned")
    }

    // =========================================================================
    // Load & Read
    // =========================================================================

    /// Populates the collection from the fixture set, newest first.
    ///
    /// Simulates the bulk backend fetch; always succeeds. Calling it again
    /// re-seeds the collection.
    pub async fn load(&self) {
        self.lock().loading = true;
        self.latency.load.wait().await;

        let mut products = fixtures::seed_products();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let mut state = self.lock();
        info!(count = products.len(), "product store loaded");
        state.products = products;
        state.loading = false;
    }

    /// Fetches a single record and makes it the selected product.
    ///
    /// A miss clears the selection and returns `None`; the simulated delay
    /// affects timing only.
    pub async fn get(&self, id: &str) -> Option<Product> {
        self.lock().loading = true;
        self.latency.fetch.wait().await;

        let mut state = self.lock();
        let product = state.products.iter().find(|p| p.id == id).cloned();
        debug!(id = %id, found = product.is_some(), "get product");
        state.selected = product.clone();
        state.loading = false;
        product
    }

    /// Snapshot of the collection, newest first.
    pub fn list(&self) -> Vec<Product> {
        self.lock().products.clone()
    }

    /// Number of records currently held.
    pub fn total(&self) -> usize {
        self.lock().products.len()
    }

    /// True while `load()` or `get()` is awaiting its simulated backend.
    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Creates a product from a draft and returns the stored record.
    ///
    /// Generates the id (UUID v4) and both timestamps, which are equal at
    /// creation. Head insertion keeps the newest-first invariant by
    /// construction, not by re-sorting. Field presence is the validator's
    /// job; this layer stores what it is given.
    pub fn create(&self, draft: ProductDraft) -> Product {
        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4().to_string(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            stock: draft.stock,
            min_stock: draft.min_stock,
            category: draft.category,
            sku: draft.sku,
            created_at: now,
            updated_at: now,
        };

        let mut state = self.lock();
        debug!(id = %product.id, name = %product.name, "create product");
        state.products.insert(0, product.clone());
        product
    }

    /// Applies a partial update to the record with `id`.
    ///
    /// Shallow merge: provided fields overwrite, unmentioned fields are
    /// retained; `id` and `created_at` are preserved and `updated_at` is
    /// refreshed. If the record is the selected one, the selection is
    /// refreshed to the merged value.
    pub fn update(&self, id: &str, patch: ProductPatch) -> StoreResult<Product> {
        let mut state = self.lock();
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        product.apply_patch(&patch);
        product.updated_at = refreshed_timestamp(product.updated_at);
        let updated = product.clone();
        debug!(id = %id, "update product");

        if state.selected.as_ref().is_some_and(|s| s.id == id) {
            state.selected = Some(updated.clone());
        }
        Ok(updated)
    }

    /// Removes the record with `id` from the collection.
    ///
    /// Strict removal, no tombstone. Clears the selection if it pointed at
    /// the removed record.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut state = self.lock();
        let index = state
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        state.products.remove(index);
        debug!(id = %id, "delete product");

        if state.selected.as_ref().is_some_and(|s| s.id == id) {
            state.selected = None;
        }
        Ok(())
    }

    // =========================================================================
    // Derived Views
    // =========================================================================

    /// Records whose category equals `category` exactly (case-sensitive).
    /// An unknown category yields an empty vec, not an error.
    pub fn by_category(&self, category: &str) -> Vec<Product> {
        self.lock()
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Records below their low-stock threshold (default 10 when unset).
    pub fn low_stock(&self) -> Vec<Product> {
        self.lock()
            .products
            .iter()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The currently selected product, if any.
    pub fn selected(&self) -> Option<Product> {
        self.lock().selected.clone()
    }

    /// Unconditionally clears the selection.
    pub fn clear_selection(&self) {
        self.lock().selected = None;
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        ProductStore::new(StoreLatency::default())
    }
}

/// `Utc::now()`, bumped past `previous` when the clock has not advanced.
/// Keeps `updated_at` strictly increasing even on coarse clocks.
fn refreshed_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + TimeDelta::nanoseconds(1)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
