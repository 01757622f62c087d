//! # Navigation Configuration
//!
//! Sidebar menu definitions consumed by the presentation layer.
//!
//! ## Adding a Menu Item
//! Append a [`MenuItem`] to [`navigation_menu`]. Icons are named after the
//! frontend icon set (`home`, `package`, `edit`, `trash`, `filter`,
//! `search`, `plus`, `menu`, `back`, `close`).
//!
//! ## Active-Match Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  current path        active_paths        result                     │
//! │  ─────────────       ─────────────       ──────                     │
//! │  /products           ["/products"]       active (exact)             │
//! │  /products/42/edit   ["/products"]       active (prefix)            │
//! │  /dashboard          ["/products"]       inactive                   │
//! │  /anything           ["/"]               inactive (root excluded    │
//! │                                          from prefix matching)      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Menu Item
// =============================================================================

/// One entry in the sidebar navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MenuItem {
    /// Route path this entry navigates to.
    pub path: String,

    /// Display name.
    pub name: String,

    /// Icon identifier from the frontend icon set.
    pub icon: String,

    /// Paths that render this entry as active (see module docs).
    pub active_paths: Vec<String>,

    /// Optional badge count (e.g. number of low-stock products).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<u32>,

    /// Disabled entries render but do not navigate.
    #[serde(default)]
    pub disabled: bool,
}

impl MenuItem {
    fn new(path: &str, name: &str, icon: &str) -> Self {
        MenuItem {
            path: path.to_string(),
            name: name.to_string(),
            icon: icon.to_string(),
            active_paths: vec![path.to_string()],
            badge: None,
            disabled: false,
        }
    }
}

// =============================================================================
// Menu Definition
// =============================================================================

/// The ordered sidebar menu.
pub fn navigation_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new("/dashboard", "Dashboard", "home"),
        MenuItem::new("/products", "Products", "package"),
    ]
}

/// Whether a menu item should render as active for the current route.
///
/// Active when any of the item's `active_paths` matches the current path
/// exactly, or is a prefix of it (nested routes like `/products/42/edit`).
/// The root path never prefix-matches, otherwise it would be active
/// everywhere.
pub fn is_menu_active(item: &MenuItem, current_path: &str) -> bool {
    item.active_paths.iter().any(|active_path| {
        active_path == current_path
            || (active_path != "/" && current_path.starts_with(active_path.as_str()))
    })
}

/// Finds the menu entry that navigates to `path`, if any.
pub fn menu_item_by_path<'a>(menu: &'a [MenuItem], path: &str) -> Option<&'a MenuItem> {
    menu.iter().find(|item| item.path == path)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order_and_icons() {
        let menu = navigation_menu();
        assert_eq!(menu.len(), 2);
        assert_eq!(menu[0].path, "/dashboard");
        assert_eq!(menu[0].icon, "home");
        assert_eq!(menu[1].path, "/products");
        assert_eq!(menu[1].icon, "package");
    }

    #[test]
    fn test_exact_match_is_active() {
        let menu = navigation_menu();
        assert!(is_menu_active(&menu[1], "/products"));
        assert!(!is_menu_active(&menu[1], "/dashboard"));
    }

    #[test]
    fn test_nested_route_prefix_matches() {
        let menu = navigation_menu();
        assert!(is_menu_active(&menu[1], "/products/42"));
        assert!(is_menu_active(&menu[1], "/products/42/edit"));
        assert!(is_menu_active(&menu[1], "/products/create"));
        assert!(!is_menu_active(&menu[0], "/products/42"));
    }

    #[test]
    fn test_root_path_never_prefix_matches() {
        let mut home = MenuItem::new("/", "Home", "home");
        home.active_paths = vec!["/".to_string()];

        assert!(is_menu_active(&home, "/"));
        assert!(!is_menu_active(&home, "/products"));
    }

    #[test]
    fn test_empty_active_paths_is_never_active() {
        let mut item = MenuItem::new("/reports", "Reports", "filter");
        item.active_paths.clear();
        assert!(!is_menu_active(&item, "/reports"));
    }

    #[test]
    fn test_menu_item_by_path() {
        let menu = navigation_menu();
        assert_eq!(
            menu_item_by_path(&menu, "/products").map(|i| i.name.as_str()),
            Some("Products")
        );
        assert!(menu_item_by_path(&menu, "/missing").is_none());
    }
}
