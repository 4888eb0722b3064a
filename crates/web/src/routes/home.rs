//! Landing page and logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Redirect};
use tower_sessions::Session;
use tracing::instrument;

use crate::{
    error::AppError,
    filters,
    models::{Toast, session},
};

/// A role card on the landing page.
#[derive(Debug, Clone)]
pub struct RoleCard {
    pub title: &'static str,
    pub description: &'static str,
    pub body: &'static str,
    pub href: &'static str,
    pub action: &'static str,
}

const ROLE_CARDS: [RoleCard; 3] = [
    RoleCard {
        title: "For Users",
        description: "Discover and rate stores in your area",
        body: "Browse through our collection of registered stores and submit your ratings. \
               Help others make informed decisions.",
        href: "/user/stores",
        action: "Browse Stores",
    },
    RoleCard {
        title: "For Store Owners",
        description: "Monitor your store's performance",
        body: "Track your store's ratings and see what customers think about your services. \
               Use the feedback to improve.",
        href: "/store-owner/dashboard",
        action: "Store Owner Dashboard",
    },
    RoleCard {
        title: "For Administrators",
        description: "Manage the entire platform",
        body: "Add new stores, manage users, and view platform statistics. \
               Keep the platform running smoothly.",
        href: "/admin/dashboard",
        action: "Admin Dashboard",
    },
];

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub current_path: &'static str,
    pub toasts: Vec<Toast>,
    pub cards: Vec<RoleCard>,
}

/// Landing page.
///
/// GET /
#[instrument(skip(session))]
pub async fn index(session: Session) -> impl IntoResponse {
    HomeTemplate {
        current_path: "/",
        toasts: session::take_toasts(&session).await,
        cards: ROLE_CARDS.to_vec(),
    }
}

/// Log out.
///
/// POST /logout
///
/// There is no sign-in, so this only destroys the visitor's session and
/// says goodbye on the landing page. The notification goes into a fresh
/// session.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;
    // flush keeps the record id; without a new one the notice is saved under the old id.
    session.cycle_id().await?;
    session::push_toast(
        &session,
        Toast::new("Logged out", "You have been logged out successfully."),
    )
    .await?;

    Ok(Redirect::to("/"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use store_rating_core::{Score, StoreId};
    use tower_sessions::{MemoryStore, SessionStore};

    use super::*;
    use crate::models::SubmittedRating;

    #[tokio::test]
    async fn test_logout_deletes_stored_session() {
        let store = Arc::new(MemoryStore::default());
        let session = Session::new(None, store.clone(), None);
        let rating = SubmittedRating {
            store_id: StoreId::new(2),
            score: Score::new(5).unwrap(),
        };
        session::record_rating(&session, rating).await.unwrap();
        session.save().await.unwrap();
        let old_id = session.id().unwrap();
        assert!(store.load(&old_id).await.unwrap().is_some());

        let response = logout(session.clone()).await.unwrap().into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        session.save().await.unwrap();

        assert!(store.load(&old_id).await.unwrap().is_none());
        let new_id = session.id().unwrap();
        assert_ne!(new_id, old_id);

        assert!(session::submitted_ratings(&session).await.is_empty());
        let toasts = session::take_toasts(&session).await;
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].title, "Logged out");
    }

    #[test]
    fn test_home_renders_role_cards() {
        let html = HomeTemplate {
            current_path: "/",
            toasts: vec![Toast::new("Logged out", "You have been logged out successfully.")],
            cards: ROLE_CARDS.to_vec(),
        }
        .render()
        .unwrap();

        assert!(html.contains("For Store Owners"));
        assert!(html.contains("href=\"/admin/dashboard\""));
        assert!(html.contains("You have been logged out successfully."));
    }
}
