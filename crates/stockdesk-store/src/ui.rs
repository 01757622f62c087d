//! # UI State Store
//!
//! Transient interface state, independent of product data: sidebar
//! collapse, active menu, delete-confirmation modal, and the notification
//! banner.
//!
//! ## Notification Timing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                 Notification Auto-Dismiss                           │
//! │                                                                     │
//! │  notify("saved") ──► banner visible ──► 3s timer ──► hidden         │
//! │                                                                     │
//! │  A notify() before the timer fires REPLACES message and level but   │
//! │  leaves the earlier timer running. Both timers eventually fire      │
//! │  hide; the later one is a no-op. Cosmetic race, no correctness      │
//! │  impact - kept exactly as the original behaves.                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stores no product data and never calls into [`crate::ProductStore`].

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use stockdesk_core::{NotificationLevel, NOTIFICATION_DISMISS_MS};

// =============================================================================
// Notification
// =============================================================================

/// The single active notification banner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub message: String,
    #[serde(rename = "type")]
    pub level: NotificationLevel,
    pub show: bool,
}

// =============================================================================
// State
// =============================================================================

#[derive(Debug)]
struct UiState {
    sidebar_collapsed: bool,
    active_menu: String,
    show_delete_modal: bool,
    delete_target: Option<String>,
    notification: Notification,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            sidebar_collapsed: false,
            active_menu: "products".to_string(),
            show_delete_modal: false,
            delete_target: None,
            notification: Notification::default(),
        }
    }
}

/// The UI state store.
///
/// ## Thread Safety
/// Same shape as [`crate::ProductStore`]: `Arc<Mutex<_>>`, cloned handles
/// share one state. The dismiss timer runs as a spawned task holding a
/// clone, so `notify` must be called inside a tokio runtime.
#[derive(Debug, Clone)]
pub struct UiStore {
    state: Arc<Mutex<UiState>>,
    dismiss_after: Duration,
}

impl UiStore {
    pub fn new() -> Self {
        UiStore {
            state: Arc::new(Mutex::new(UiState::default())),
            dismiss_after: Duration::from_millis(NOTIFICATION_DISMISS_MS),
        }
    }

    /// Overrides the auto-dismiss delay. Tests use short virtual delays.
    pub fn with_dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, UiState> {
        self.state.lock().expect("ui store mutex poisoned")
    }

    // =========================================================================
    // Sidebar
    // =========================================================================

    pub fn toggle_sidebar(&self) {
        let mut state = self.lock();
        state.sidebar_collapsed = !state.sidebar_collapsed;
    }

    pub fn open_sidebar(&self) {
        self.lock().sidebar_collapsed = false;
    }

    pub fn close_sidebar(&self) {
        self.lock().sidebar_collapsed = true;
    }

    pub fn is_sidebar_open(&self) -> bool {
        !self.lock().sidebar_collapsed
    }

    // =========================================================================
    // Menu
    // =========================================================================

    pub fn set_active_menu(&self, menu: impl Into<String>) {
        self.lock().active_menu = menu.into();
    }

    pub fn active_menu(&self) -> String {
        self.lock().active_menu.clone()
    }

    // =========================================================================
    // Delete Modal
    // =========================================================================

    /// Arms the delete confirmation for the given product id.
    pub fn open_delete_modal(&self, id: impl Into<String>) {
        let mut state = self.lock();
        state.delete_target = Some(id.into());
        state.show_delete_modal = true;
    }

    /// Dismisses the confirmation and forgets the target.
    pub fn hide_delete_modal(&self) {
        let mut state = self.lock();
        state.show_delete_modal = false;
        state.delete_target = None;
    }

    pub fn is_delete_modal_visible(&self) -> bool {
        self.lock().show_delete_modal
    }

    pub fn delete_target(&self) -> Option<String> {
        self.lock().delete_target.clone()
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    /// Shows a notification and schedules its auto-dismiss.
    ///
    /// Replaces whatever banner is currently showing. Each call spawns its
    /// own hide timer; a superseded timer's hide is a no-op (see module
    /// docs for the deliberate race).
    pub fn notify(&self, message: impl Into<String>, level: NotificationLevel) {
        let message = message.into();
        debug!(level = ?level, message = %message, "show notification");
        self.lock().notification = Notification {
            message,
            level,
            show: true,
        };

        let store = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(store.dismiss_after).await;
            store.hide_notification();
        });
    }

    /// Hides the banner, keeping message and level for fade-out rendering.
    pub fn hide_notification(&self) {
        self.lock().notification.show = false;
    }

    pub fn notification(&self) -> Notification {
        self.lock().notification.clone()
    }

    pub fn is_notification_visible(&self) -> bool {
        self.lock().notification.show
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notify(message, NotificationLevel::Success);
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notify(message, NotificationLevel::Error);
    }

    pub fn notify_warning(&self, message: impl Into<String>) {
        self.notify(message, NotificationLevel::Warning);
    }

    pub fn notify_info(&self, message: impl Into<String>) {
        self.notify(message, NotificationLevel::Info);
    }
}

impl Default for UiStore {
    fn default() -> Self {
        UiStore::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sidebar_flags() {
        let ui = UiStore::new();
        assert!(ui.is_sidebar_open());

        ui.toggle_sidebar();
        assert!(!ui.is_sidebar_open());
        ui.toggle_sidebar();
        assert!(ui.is_sidebar_open());

        ui.close_sidebar();
        assert!(!ui.is_sidebar_open());
        ui.open_sidebar();
        assert!(ui.is_sidebar_open());
    }

    #[test]
    fn test_active_menu_defaults_to_products() {
        let ui = UiStore::new();
        assert_eq!(ui.active_menu(), "products");

        ui.set_active_menu("dashboard");
        assert_eq!(ui.active_menu(), "dashboard");
    }

    #[test]
    fn test_delete_modal_holds_target_until_hidden() {
        let ui = UiStore::new();
        assert!(!ui.is_delete_modal_visible());

        ui.open_delete_modal("12");
        assert!(ui.is_delete_modal_visible());
        assert_eq!(ui.delete_target(), Some("12".to_string()));

        ui.hide_delete_modal();
        assert!(!ui.is_delete_modal_visible());
        assert_eq!(ui.delete_target(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_notification_auto_dismisses_after_delay() {
        let ui = UiStore::new();
        ui.notify_success("Product created");

        let shown = ui.notification();
        assert!(shown.show);
        assert_eq!(shown.message, "Product created");
        assert_eq!(shown.level, NotificationLevel::Success);

        tokio::time::sleep(Duration::from_millis(NOTIFICATION_DISMISS_MS + 100)).await;
        assert!(!ui.is_notification_visible());
        // Message survives the hide for fade-out rendering.
        assert_eq!(ui.notification().message, "Product created");
    }

    #[tokio::test(start_paused = true)]
    async fn test_replacement_inherits_the_earlier_timer() {
        let ui = UiStore::new();
        ui.notify_info("first");

        tokio::time::sleep(Duration::from_millis(1_500)).await;
        ui.notify_error("second");
        assert!(ui.is_notification_visible());

        // The first timer fires 3s after "first" and hides "second" early.
        tokio::time::sleep(Duration::from_millis(1_600)).await;
        let n = ui.notification();
        assert!(!n.show);
        assert_eq!(n.message, "second");
        assert_eq!(n.level, NotificationLevel::Error);
    }

    #[tokio::test(start_paused = true)]
    async fn test_custom_dismiss_delay() {
        let ui = UiStore::new().with_dismiss_after(Duration::from_millis(100));
        ui.notify_warning("short-lived");

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!ui.is_notification_visible());
    }

    #[tokio::test]
    async fn test_notification_serializes_like_the_frontend_expects() {
        let ui = UiStore::new();
        ui.notify_info("hello");

        let json = serde_json::to_value(ui.notification()).unwrap();
        assert_eq!(json["message"], "hello");
        assert_eq!(json["type"], "info");
        assert_eq!(json["show"], true);
    }
}
