//! Admin dashboard route handlers.
//!
//! The dashboard is one page with four tabs selected by the `tab` query
//! parameter. Every tab shows the platform stat cards above it.

pub mod dashboard;
pub mod forms;
pub mod stores;
pub mod users;

use serde::Deserialize;
use tower_sessions::Session;

use crate::models::{Toast, session};
use crate::state::AppState;

use super::types::{StatsView, TabLink};

/// Path of the admin dashboard page.
pub const DASHBOARD_PATH: &str = "/admin/dashboard";

/// Tabs of the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Stores,
    Users,
    AddStore,
    AddUser,
}

impl AdminTab {
    /// All tabs in display order.
    pub const ALL: [Self; 4] = [Self::Stores, Self::Users, Self::AddStore, Self::AddUser];

    /// Parse the `tab` query parameter. Unknown or missing values select
    /// the stores tab.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("users") => Self::Users,
            Some("add-store") => Self::AddStore,
            Some("add-user") => Self::AddUser,
            _ => Self::Stores,
        }
    }

    /// The value written to the `tab` query parameter.
    #[must_use]
    pub const fn as_param(&self) -> &'static str {
        match self {
            Self::Stores => "stores",
            Self::Users => "users",
            Self::AddStore => "add-store",
            Self::AddUser => "add-user",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Stores => "Stores",
            Self::Users => "Users",
            Self::AddStore => "Add Store",
            Self::AddUser => "Add User",
        }
    }

    /// Link to this tab with no search or sort applied.
    #[must_use]
    pub fn href(&self) -> String {
        format!("{DASHBOARD_PATH}?tab={}", self.as_param())
    }
}

/// Tab bar with `active` highlighted.
#[must_use]
pub fn admin_tabs(active: AdminTab) -> Vec<TabLink> {
    AdminTab::ALL
        .iter()
        .map(|tab| TabLink::new(tab.label(), tab.href(), *tab == active))
        .collect()
}

/// Pending notifications and the stat cards, for tabs that fetch nothing
/// else.
pub(crate) async fn page_frame(state: &AppState, session: &Session) -> (Vec<Toast>, StatsView) {
    let stats = state.api().fetch_platform_stats().await;
    (session::take_toasts(session).await, StatsView::from(stats))
}

// =============================================================================
// Row Actions
// =============================================================================

/// Buttons at the end of each store and user row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    View,
    Edit,
    Delete,
}

impl RowAction {
    /// Notification for an action on a store row.
    #[must_use]
    pub fn store_toast(self, name: &str) -> Toast {
        match self {
            Self::View => Toast::new("Store Details", format!("Viewing details for {name}")),
            Self::Edit => Toast::new("Edit Store", format!("Editing {name}")),
            Self::Delete => Toast::destructive("Delete Store", format!("Deleting {name}")),
        }
    }

    /// Notification for an action on a user row.
    #[must_use]
    pub fn user_toast(self, name: &str) -> Toast {
        match self {
            Self::View => Toast::new("User Details", format!("Viewing details for {name}")),
            Self::Edit => Toast::new("Edit User", format!("Editing {name}")),
            Self::Delete => Toast::destructive("Delete User", format!("Deleting {name}")),
        }
    }
}
