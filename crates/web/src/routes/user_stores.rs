//! End-user store browser.
//!
//! Lists every store as a card with its overall rating and the visitor's
//! own score. `?rate={id}` opens the star picker on one card; picking a star
//! posts the score. Submitted scores are kept in the session and replace
//! the fixture score for the rest of the visit.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use store_rating_core::{Score, StoreId, filter_by_query, format_rating};

use crate::{
    error::AppError,
    filters,
    models::{SubmittedRating, Toast, UserStore, session},
    state::AppState,
};

use super::types::score_stars;

/// Path of the store browser.
pub const STORES_PATH: &str = "/user/stores";

/// Query parameters for the store browser.
#[derive(Debug, Default, Deserialize)]
pub struct StoresQuery {
    /// Free-text search query.
    pub q: Option<String>,
    /// Store whose star picker is open. Values that are not an id are ignored.
    pub rate: Option<String>,
}

impl StoresQuery {
    fn open_picker(&self) -> Option<StoreId> {
        self.rate
            .as_deref()
            .and_then(|rate| rate.trim().parse::<i32>().ok())
            .map(StoreId::new)
    }
}

/// Submitted star picker.
#[derive(Debug, Deserialize)]
pub struct RatingForm {
    pub rating: String,
    /// Search query to return to.
    #[serde(default)]
    pub q: String,
}

/// Store browser URL with the search query and optionally an open picker.
fn stores_href(search: &str, rate: Option<StoreId>) -> String {
    let mut params = Vec::new();
    if !search.is_empty() {
        params.push(format!("q={}", urlencoding::encode(search)));
    }
    if let Some(id) = rate {
        params.push(format!("rate={id}"));
    }

    if params.is_empty() {
        STORES_PATH.to_string()
    } else {
        format!("{STORES_PATH}?{}", params.join("&"))
    }
}

/// Replace fixture scores with the ones submitted this session.
fn overlay_submitted(stores: &mut [UserStore], submitted: &[SubmittedRating]) {
    for rating in submitted {
        if let Some(store) = stores.iter_mut().find(|s| s.id == rating.store_id) {
            store.user_rating = Some(rating.score);
        }
    }
}

// =============================================================================
// View Types
// =============================================================================

/// A star button in the picker.
#[derive(Debug, Clone)]
pub struct PickerStar {
    pub value: u8,
    pub class: &'static str,
}

/// A store card.
#[derive(Debug, Clone)]
pub struct StoreCard {
    pub name: String,
    pub address: String,
    /// Overall rating, one decimal.
    pub rating: String,
    /// The visitor's own score as star classes.
    pub your_stars: Option<Vec<&'static str>>,
    /// Star buttons, when the picker is open on this card.
    pub picker: Option<Vec<PickerStar>>,
    pub rate_href: String,
    pub rate_label: &'static str,
    pub submit_path: String,
}

impl StoreCard {
    fn new(store: &UserStore, picker_open: bool, search: &str) -> Self {
        let picker = picker_open.then(|| {
            let selected = store.user_rating.map_or([false; 5], Score::stars);
            Score::all()
                .zip(selected)
                .map(|(score, filled)| PickerStar {
                    value: score.value(),
                    class: if filled { "star star-full" } else { "star star-empty" },
                })
                .collect()
        });

        Self {
            name: store.name.clone(),
            address: store.address.clone(),
            rating: format_rating(store.rating),
            your_stars: store.user_rating.map(score_stars),
            picker,
            rate_href: stores_href(search, Some(store.id)),
            rate_label: if store.user_rating.is_some() {
                "Change Rating"
            } else {
                "Rate This Store"
            },
            submit_path: format!("{STORES_PATH}/{}/rating", store.id),
        }
    }
}

/// Store browser page.
#[derive(Template, WebTemplate)]
#[template(path = "user/stores.html")]
pub struct StoresTemplate {
    pub current_path: &'static str,
    pub toasts: Vec<Toast>,
    pub search_value: String,
    /// Link that closes an open picker.
    pub cancel_href: String,
    pub stores: Vec<StoreCard>,
}

impl StoresTemplate {
    #[must_use]
    pub fn new(toasts: Vec<Toast>, stores: Vec<UserStore>, query: &StoresQuery) -> Self {
        let search = query.q.as_deref().unwrap_or_default();
        let rate = query.open_picker();
        let cards = filter_by_query(stores, search)
            .iter()
            .map(|store| StoreCard::new(store, rate == Some(store.id), search))
            .collect();

        Self {
            current_path: STORES_PATH,
            toasts,
            search_value: search.to_string(),
            cancel_href: stores_href(search, None),
            stores: cards,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Store browser.
///
/// GET /user/stores?q=&rate=
#[instrument(skip(state, session))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<StoresQuery>,
) -> impl IntoResponse {
    let mut stores = state.api().fetch_user_stores().await;
    overlay_submitted(&mut stores, &session::submitted_ratings(&session).await);
    let toasts = session::take_toasts(&session).await;

    StoresTemplate::new(toasts, stores, &query)
}

/// Submit a rating.
///
/// POST /user/stores/{id}/rating
#[instrument(skip(state, session, form), fields(rating = %form.rating))]
pub async fn submit_rating(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Form(form): Form<RatingForm>,
) -> Result<impl IntoResponse, AppError> {
    let score = form
        .rating
        .trim()
        .parse::<u8>()
        .map_err(|_| AppError::BadRequest(format!("invalid rating: {}", form.rating)))
        .and_then(|value| Score::new(value).map_err(|e| AppError::BadRequest(e.to_string())))?;

    let store_id = StoreId::new(id);
    let stores = state.api().fetch_user_stores().await;
    let store = stores
        .iter()
        .find(|s| s.id == store_id)
        .ok_or_else(|| AppError::NotFound(format!("store {store_id}")))?;

    match state.api().submit_rating(store_id, score).await {
        Ok(()) => {
            session::record_rating(&session, SubmittedRating { store_id, score }).await?;
            let toast = Toast::new(
                "Rating submitted",
                format!("You rated {} {score} out of 5 stars.", store.name),
            );
            session::push_toast(&session, toast).await?;
            Ok(Redirect::to(&stores_href(&form.q, None)))
        }
        Err(e) => {
            tracing::warn!(error = %e, store = %store.name, "Rating submission failed");
            let toast = Toast::destructive(
                "Error",
                "There was an error submitting your rating. Please try again.",
            );
            session::push_toast(&session, toast).await?;
            Ok(Redirect::to(&stores_href(&form.q, Some(store_id))))
        }
    }
}
