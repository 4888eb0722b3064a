//! Admin dashboard page handler.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use crate::{models::session, state::AppState};

use super::super::types::{ListQuery, StatsView};
use super::{
    AdminTab,
    forms::{AddStoreTemplate, AddUserTemplate},
    page_frame,
    stores::StoresTabTemplate,
    users::UsersTabTemplate,
};

/// Admin dashboard.
///
/// GET /admin/dashboard?tab=&q=&sort=&dir=
///
/// List tabs fetch the platform stats and their list concurrently.
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Response {
    let api = state.api();

    match AdminTab::from_param(query.tab.as_deref()) {
        AdminTab::Stores => {
            let (stats, stores) = tokio::join!(api.fetch_platform_stats(), api.fetch_stores());
            let toasts = session::take_toasts(&session).await;
            StoresTabTemplate::new(toasts, StatsView::from(stats), stores, &query).into_response()
        }
        AdminTab::Users => {
            let (stats, users) = tokio::join!(api.fetch_platform_stats(), api.fetch_users());
            let toasts = session::take_toasts(&session).await;
            UsersTabTemplate::new(toasts, StatsView::from(stats), users, &query).into_response()
        }
        AdminTab::AddStore => {
            let (toasts, stats) = page_frame(&state, &session).await;
            AddStoreTemplate::empty(toasts, stats).into_response()
        }
        AdminTab::AddUser => {
            let (toasts, stats) = page_frame(&state, &session).await;
            AddUserTemplate::empty(toasts, stats).into_response()
        }
    }
}
