//! # Route Table
//!
//! Path → page configuration consumed by the router collaborator.
//!
//! Configuration only, not logic: the router owns path matching and
//! parameter extraction; this table tells it which page a path renders and
//! what the breadcrumb trail looks like.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  /dashboard           ──► Dashboard                                 │
//! │  /products            ──► ProductList                               │
//! │  /products/create     ──► ProductCreate   (parent: ProductList)     │
//! │  /products/:id/edit   ──► ProductEdit     (parent: ProductList)     │
//! │  /products/:id        ──► ProductView     (parent: ProductList)     │
//! │  anything else        ──► NotFound                                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Page Identifiers
// =============================================================================

/// Every page the application can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Page {
    Dashboard,
    ProductList,
    ProductCreate,
    ProductEdit,
    ProductView,
    NotFound,
}

// =============================================================================
// Route Metadata
// =============================================================================

/// Presentation metadata attached to a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RouteMeta {
    /// Window/tab title.
    pub title: String,

    /// Label shown in the breadcrumb trail.
    pub breadcrumb_label: String,

    /// Page whose breadcrumb precedes this one, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breadcrumb_parent: Option<Page>,
}

/// One entry in the route table. Paths use `:name` parameter segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Route {
    pub path: String,
    pub page: Page,
    pub meta: RouteMeta,
}

impl Route {
    fn new(path: &str, page: Page, title: &str, breadcrumb_label: &str) -> Self {
        Route {
            path: path.to_string(),
            page,
            meta: RouteMeta {
                title: title.to_string(),
                breadcrumb_label: breadcrumb_label.to_string(),
                breadcrumb_parent: None,
            },
        }
    }

    fn with_parent(mut self, parent: Page) -> Self {
        self.meta.breadcrumb_parent = Some(parent);
        self
    }
}

// =============================================================================
// Route Definition
// =============================================================================

/// The full route table, in matching order.
///
/// `/products/create` is listed before `/products/:id` so the literal
/// segment wins over the parameter.
pub fn route_table() -> Vec<Route> {
    vec![
        Route::new("/dashboard", Page::Dashboard, "Dashboard", "Dashboard"),
        Route::new("/products", Page::ProductList, "Product List", "Products"),
        Route::new(
            "/products/create",
            Page::ProductCreate,
            "Create Product",
            "Create Product",
        )
        .with_parent(Page::ProductList),
        Route::new(
            "/products/:id/edit",
            Page::ProductEdit,
            "Edit Product",
            "Edit Product",
        )
        .with_parent(Page::ProductList),
        Route::new(
            "/products/:id",
            Page::ProductView,
            "Product Details",
            "Product Details",
        )
        .with_parent(Page::ProductList),
    ]
}

/// The catch-all shown when nothing in [`route_table`] matches.
pub fn not_found_route() -> Route {
    Route::new("/:pathMatch(.*)*", Page::NotFound, "404 - Page Not Found", "Not Found")
}

/// Looks up the route that renders `page`.
pub fn route_for_page(routes: &[Route], page: Page) -> Option<&Route> {
    routes.iter().find(|route| route.page == page)
}

// =============================================================================
// Unit Tests
// =============================================================================
