//! Store owner dashboard route handlers.
//!
//! Shows the owner's store summary above two tabs: the users who rated the
//! store, and the distribution of their scores.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use tower_sessions::Session;
use tracing::instrument;

use store_rating_core::{RatingDistribution, Score, format_rating};

use crate::{
    components::{DataTableConfig, HeaderCell, data_table::ratings_table_config},
    filters,
    models::{OwnerStore, RatingColumn, RatingEntry, Toast, session},
    state::AppState,
};

use super::types::{
    AverageView, ListQuery, SearchBox, TabLink, apply_listing, build_preserve_params, score_stars,
    sort_summary,
};

/// Path of the store owner dashboard page.
pub const DASHBOARD_PATH: &str = "/store-owner/dashboard";

/// Tabs of the store owner dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OwnerTab {
    #[default]
    Users,
    Analytics,
}

impl OwnerTab {
    pub const ALL: [Self; 2] = [Self::Users, Self::Analytics];

    /// Parse the `tab` query parameter, defaulting to the users tab.
    #[must_use]
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some("analytics") => Self::Analytics,
            _ => Self::Users,
        }
    }

    #[must_use]
    pub const fn as_param(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Analytics => "analytics",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Users => "Users & Ratings",
            Self::Analytics => "Analytics",
        }
    }
}

fn owner_tabs(active: OwnerTab) -> Vec<TabLink> {
    OwnerTab::ALL
        .iter()
        .map(|tab| {
            let href = format!("{DASHBOARD_PATH}?tab={}", tab.as_param());
            TabLink::new(tab.label(), href, *tab == active)
        })
        .collect()
}

// =============================================================================
// View Types
// =============================================================================

/// Store summary for the stat cards.
#[derive(Debug, Clone)]
pub struct OwnerStoreView {
    pub name: String,
    pub address: String,
    pub average: AverageView,
    pub total_ratings: u32,
    pub total_users: u32,
}

impl From<OwnerStore> for OwnerStoreView {
    fn from(store: OwnerStore) -> Self {
        Self {
            average: AverageView::new(store.average_rating),
            name: store.name,
            address: store.address,
            total_ratings: store.total_ratings,
            total_users: store.total_users,
        }
    }
}

/// One row of the ratings table.
#[derive(Debug, Clone)]
pub struct RatingRow {
    pub name: String,
    pub email: String,
    pub stars: Vec<&'static str>,
    /// Score as text, for screen readers.
    pub score: u8,
    pub date: String,
}

impl From<&RatingEntry> for RatingRow {
    fn from(entry: &RatingEntry) -> Self {
        Self {
            name: entry.name.clone(),
            email: entry.email.clone(),
            stars: score_stars(entry.rating),
            score: entry.rating.value(),
            date: entry.formatted_date(),
        }
    }
}

/// One bar of the rating distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionBar {
    /// "5 stars", "1 star".
    pub label: String,
    pub count: u32,
    pub percent: u32,
}

fn distribution_bars(distribution: &RatingDistribution) -> Vec<DistributionBar> {
    Score::all()
        .rev()
        .map(|score| {
            let label = if score.value() == 1 {
                "1 star".to_string()
            } else {
                format!("{score} stars")
            };
            DistributionBar {
                label,
                count: distribution.count(score),
                percent: distribution.percent(score),
            }
        })
        .collect()
}

// =============================================================================
// Templates
// =============================================================================

/// Owner dashboard with the ratings table open.
#[derive(Template, WebTemplate)]
#[template(path = "store_owner/users.html")]
pub struct OwnerUsersTemplate {
    pub current_path: &'static str,
    pub toasts: Vec<Toast>,
    pub store: OwnerStoreView,
    pub tabs: Vec<TabLink>,
    pub search: SearchBox,
    pub table: DataTableConfig,
    pub headers: Vec<HeaderCell>,
    /// Active sort, e.g. "name ↑".
    pub sort_summary: String,
    pub ratings: Vec<RatingRow>,
}

impl OwnerUsersTemplate {
    #[must_use]
    pub fn new(
        toasts: Vec<Toast>,
        store: OwnerStore,
        ratings: Vec<RatingEntry>,
        query: &ListQuery,
    ) -> Self {
        let table = ratings_table_config();
        let tab = OwnerTab::Users.as_param();
        let listing = apply_listing::<RatingColumn>(ratings, query);
        let preserve_params = build_preserve_params(Some(tab), query.search());

        Self {
            current_path: DASHBOARD_PATH,
            toasts,
            store: OwnerStoreView::from(store),
            tabs: owner_tabs(OwnerTab::Users),
            search: SearchBox::new(DASHBOARD_PATH, &table.search_placeholder, Some(tab), query),
            headers: table.header_cells(&listing.sort, DASHBOARD_PATH, &preserve_params),
            sort_summary: sort_summary(&listing.sort),
            ratings: listing.records.iter().map(RatingRow::from).collect(),
            table,
        }
    }
}

/// Owner dashboard with the analytics tab open.
#[derive(Template, WebTemplate)]
#[template(path = "store_owner/analytics.html")]
pub struct OwnerAnalyticsTemplate {
    pub current_path: &'static str,
    pub toasts: Vec<Toast>,
    pub store: OwnerStoreView,
    pub tabs: Vec<TabLink>,
    pub bars: Vec<DistributionBar>,
    pub total: u32,
    /// Mean of the listed ratings, one decimal.
    pub average: Option<String>,
}

impl OwnerAnalyticsTemplate {
    #[must_use]
    pub fn new(toasts: Vec<Toast>, store: OwnerStore, ratings: &[RatingEntry]) -> Self {
        let distribution = RatingDistribution::from_scores(ratings.iter().map(|r| r.rating));

        Self {
            current_path: DASHBOARD_PATH,
            toasts,
            store: OwnerStoreView::from(store),
            tabs: owner_tabs(OwnerTab::Analytics),
            bars: distribution_bars(&distribution),
            total: distribution.total(),
            average: distribution.average().map(format_rating),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Store owner dashboard.
///
/// GET /store-owner/dashboard?tab=&q=&sort=&dir=
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListQuery>,
) -> Response {
    let api = state.api();
    let (store, ratings) = tokio::join!(api.fetch_owner_store(), api.fetch_store_ratings());
    let toasts = session::take_toasts(&session).await;

    match OwnerTab::from_param(query.tab.as_deref()) {
        OwnerTab::Users => OwnerUsersTemplate::new(toasts, store, ratings, &query).into_response(),
        OwnerTab::Analytics => OwnerAnalyticsTemplate::new(toasts, store, &ratings).into_response(),
    }
}
