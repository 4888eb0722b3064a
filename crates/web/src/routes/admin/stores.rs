//! Admin stores tab.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tower_sessions::Session;
use tracing::instrument;

use store_rating_core::{StoreId, format_rating};

use crate::{
    components::{DataTableConfig, HeaderCell, data_table::stores_table_config},
    error::AppError,
    filters,
    models::{Store, StoreColumn, Toast, session},
    state::AppState,
};

use super::super::types::{
    ListQuery, SearchBox, StatsView, TabLink, apply_listing, build_preserve_params, sort_summary,
};
use super::{AdminTab, DASHBOARD_PATH, RowAction, admin_tabs};

/// Store row for the admin stores table.
#[derive(Debug, Clone)]
pub struct StoreRow {
    pub name: String,
    pub email: String,
    pub address: String,
    /// One decimal, e.g. "4.5".
    pub rating: String,
    /// Form action prefix for the row buttons.
    pub actions_path: String,
}

impl From<&Store> for StoreRow {
    fn from(store: &Store) -> Self {
        Self {
            name: store.name.clone(),
            email: store.email.clone(),
            address: store.address.clone(),
            rating: format_rating(store.rating),
            actions_path: format!("/admin/stores/{}", store.id),
        }
    }
}

/// Admin dashboard with the stores tab open.
#[derive(Template, WebTemplate)]
#[template(path = "admin/stores.html")]
pub struct StoresTabTemplate {
    pub current_path: &'static str,
    pub toasts: Vec<Toast>,
    pub stats: StatsView,
    pub tabs: Vec<TabLink>,
    pub search: SearchBox,
    pub table: DataTableConfig,
    pub headers: Vec<HeaderCell>,
    /// Active sort, e.g. "name ↑".
    pub sort_summary: String,
    pub stores: Vec<StoreRow>,
}

impl StoresTabTemplate {
    /// Build the tab from the fetched stores and the request's list query.
    #[must_use]
    pub fn new(toasts: Vec<Toast>, stats: StatsView, stores: Vec<Store>, query: &ListQuery) -> Self {
        let table = stores_table_config();
        let tab = AdminTab::Stores.as_param();
        let listing = apply_listing::<StoreColumn>(stores, query);
        let preserve_params = build_preserve_params(Some(tab), query.search());

        Self {
            current_path: DASHBOARD_PATH,
            toasts,
            stats,
            tabs: admin_tabs(AdminTab::Stores),
            search: SearchBox::new(DASHBOARD_PATH, &table.search_placeholder, Some(tab), query),
            headers: table.header_cells(&listing.sort, DASHBOARD_PATH, &preserve_params),
            sort_summary: sort_summary(&listing.sort),
            stores: listing.records.iter().map(StoreRow::from).collect(),
            table,
        }
    }
}

/// Handle a row action button on the stores table.
///
/// POST /admin/stores/{id}/{action}
#[instrument(skip(state, session))]
pub async fn row_action(
    State(state): State<AppState>,
    session: Session,
    Path((id, action)): Path<(i32, RowAction)>,
) -> Result<impl IntoResponse, AppError> {
    let id = StoreId::new(id);
    let stores = state.api().fetch_stores().await;
    let store = stores
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::NotFound(format!("store {id}")))?;

    tracing::info!(store = %store.name, ?action, "Store row action");
    session::push_toast(&session, action.store_toast(&store.name)).await?;

    Ok(Redirect::to(&AdminTab::Stores.href()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fixtures;

    fn stats() -> StatsView {
        StatsView::from(fixtures::platform_stats())
    }

    #[test]
    fn test_store_row_formats_rating() {
        let stores = fixtures::admin_stores();
        let row = StoreRow::from(&stores[0]);
        assert_eq!(row.name, "Grocery Express");
        assert_eq!(row.rating, "4.5");
        assert_eq!(row.actions_path, "/admin/stores/1");
    }

    #[test]
    fn test_template_search_and_sort() {
        let query = ListQuery {
            tab: Some("stores".to_string()),
            q: Some("noida sector".to_string()),
            sort: Some("rating".to_string()),
            dir: Some("asc".to_string()),
        };
        let template = StoresTabTemplate::new(vec![], stats(), fixtures::admin_stores(), &query);

        let names: Vec<&str> = template.stores.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Tech Shyam", "Fashion Boutique Parlour", "Grocery Express"]
        );
        assert_eq!(template.sort_summary, "rating ↑");
        assert_eq!(
            template.headers[3].href.as_deref(),
            Some("/admin/dashboard?tab=stores&q=noida%20sector&sort=rating&dir=desc")
        );
    }

    #[test]
    fn test_template_renders_empty_state() {
        let query = ListQuery {
            q: Some("zzz".to_string()),
            ..ListQuery::default()
        };
        let html = StoresTabTemplate::new(vec![], stats(), fixtures::admin_stores(), &query)
            .render()
            .unwrap_or_default();
        assert!(html.contains("No stores found"));
        assert!(html.contains("Total Stores"));
    }
}
