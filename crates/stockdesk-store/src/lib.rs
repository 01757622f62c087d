//! # stockdesk-store: Stateful Stores for Stockdesk
//!
//! Two independent stores sit behind this crate, each an explicit object
//! owned by the composition root and passed by reference to whatever layer
//! needs it. There is no ambient global state.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Store Architecture                             │
//! │                                                                     │
//! │  Composition root                                                   │
//! │  ├── ProductStore ── Arc<Mutex<inner>> ── products + selection      │
//! │  └── UiStore ─────── Arc<Mutex<inner>> ── flags + notification      │
//! │                                                                     │
//! │  The two stores never call each other. The presentation layer       │
//! │  composes them (e.g. delete a product, then show a notification).   │
//! │                                                                     │
//! │  THREAD SAFETY: a single Mutex per store. Operations are logically  │
//! │  atomic single mutations; the simulated latency waits happen        │
//! │  OUTSIDE the lock, so slow "network" calls never block mutations.   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`latency`] - injectable artificial-latency configuration
//! - [`fixtures`] - the seed data standing in for a backend
//! - [`product`] - [`ProductStore`]: collection CRUD, derived views, selection
//! - [`ui`] - [`UiStore`]: sidebar, menu, delete modal, notifications

pub mod fixtures;
pub mod latency;
pub mod product;
pub mod ui;

pub use latency::{Latency, StoreLatency};
pub use product::ProductStore;
pub use ui::{Notification, UiStore};
