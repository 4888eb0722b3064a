//! Admin users tab.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tower_sessions::Session;
use tracing::instrument;

use store_rating_core::UserId;

use crate::{
    components::{DataTableConfig, HeaderCell, data_table::users_table_config},
    error::AppError,
    filters,
    models::{Toast, User, UserColumn, session},
    state::AppState,
};

use super::super::types::{
    ListQuery, SearchBox, StatsView, TabLink, apply_listing, build_preserve_params, sort_summary,
};
use super::{AdminTab, DASHBOARD_PATH, RowAction, admin_tabs};

/// User row for the admin users table.
#[derive(Debug, Clone)]
pub struct UserRow {
    pub name: String,
    pub email: String,
    pub address: String,
    pub role_label: &'static str,
    pub role_class: &'static str,
    /// Store rating, for store owners only.
    pub rating: Option<String>,
    /// Form action prefix for the row buttons.
    pub actions_path: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            address: user.address.clone(),
            role_label: user.role.label(),
            role_class: user.role.badge_class(),
            rating: user.display_rating(),
            actions_path: format!("/admin/users/{}", user.id),
        }
    }
}

/// Admin dashboard with the users tab open.
#[derive(Template, WebTemplate)]
#[template(path = "admin/users.html")]
pub struct UsersTabTemplate {
    pub current_path: &'static str,
    pub toasts: Vec<Toast>,
    pub stats: StatsView,
    pub tabs: Vec<TabLink>,
    pub search: SearchBox,
    pub table: DataTableConfig,
    pub headers: Vec<HeaderCell>,
    /// Active sort, e.g. "name ↑".
    pub sort_summary: String,
    pub users: Vec<UserRow>,
}

impl UsersTabTemplate {
    /// Build the tab from the fetched users and the request's list query.
    #[must_use]
    pub fn new(toasts: Vec<Toast>, stats: StatsView, users: Vec<User>, query: &ListQuery) -> Self {
        let table = users_table_config();
        let tab = AdminTab::Users.as_param();
        let listing = apply_listing::<UserColumn>(users, query);
        let preserve_params = build_preserve_params(Some(tab), query.search());

        Self {
            current_path: DASHBOARD_PATH,
            toasts,
            stats,
            tabs: admin_tabs(AdminTab::Users),
            search: SearchBox::new(DASHBOARD_PATH, &table.search_placeholder, Some(tab), query),
            headers: table.header_cells(&listing.sort, DASHBOARD_PATH, &preserve_params),
            sort_summary: sort_summary(&listing.sort),
            users: listing.records.iter().map(UserRow::from).collect(),
            table,
        }
    }
}

/// Handle a row action button on the users table.
///
/// POST /admin/users/{id}/{action}
#[instrument(skip(state, session))]
pub async fn row_action(
    State(state): State<AppState>,
    session: Session,
    Path((id, action)): Path<(i32, RowAction)>,
) -> Result<impl IntoResponse, AppError> {
    let id = UserId::new(id);
    let users = state.api().fetch_users().await;
    let user = users
        .iter()
        .find(|u| u.id == id)
        .ok_or_else(|| AppError::NotFound(format!("user {id}")))?;

    tracing::info!(user = %user.name, ?action, "User row action");
    session::push_toast(&session, action.user_toast(&user.name)).await?;

    Ok(Redirect::to(&AdminTab::Users.href()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures;

    #[test]
    fn test_user_row_rating_only_for_store_owners() {
        let users = fixtures::admin_users();
        let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();

        assert_eq!(rows[0].role_label, "User");
        assert_eq!(rows[0].rating, None);
        assert_eq!(rows[2].role_label, "Store Owner");
        assert_eq!(rows[2].rating.as_deref(), Some("4.2"));
        assert_eq!(rows[3].role_label, "Admin");
        assert_eq!(rows[3].role_class, "badge badge-red");
    }

    #[test]
    fn test_search_matches_role_text() {
        let query = ListQuery {
            q: Some("store_owner".to_string()),
            ..ListQuery::default()
        };
        let template = UsersTabTemplate::new(
            vec![],
            StatsView::from(fixtures::platform_stats()),
            fixtures::admin_users(),
            &query,
        );
        let names: Vec<&str> = template.users.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Abhishek Kumar", "Raman"]);
    }

    #[test]
    fn test_sort_by_role_descending() {
        let query = ListQuery {
            sort: Some("role".to_string()),
            dir: Some("desc".to_string()),
            ..ListQuery::default()
        };
        let template = UsersTabTemplate::new(
            vec![],
            StatsView::from(fixtures::platform_stats()),
            fixtures::admin_users(),
            &query,
        );
        let roles: Vec<&str> = template.users.iter().map(|u| u.role_label).collect();
        assert_eq!(
            roles,
            vec!["User", "User", "User", "Store Owner", "Store Owner", "Admin"]
        );
        assert_eq!(template.sort_summary, "role ↓");
    }
}
