//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                              - Landing page
//! GET  /health                        - Health check
//! POST /logout                        - Logout
//!
//! # Admin
//! GET  /admin/dashboard               - Stats + tabs (stores, users, add-store, add-user)
//! POST /admin/stores                  - Add store
//! POST /admin/users                   - Add user
//! POST /admin/stores/{id}/{action}    - Store row action (view, edit, delete)
//! POST /admin/users/{id}/{action}     - User row action (view, edit, delete)
//!
//! # Store owner
//! GET  /store-owner/dashboard         - Store stats + tabs (users, analytics)
//!
//! # User
//! GET  /user/stores                   - Store browser
//! POST /user/stores/{id}/rating       - Submit a rating
//! ```

pub mod admin;
pub mod home;
pub mod store_owner;
pub mod types;
pub mod user_stores;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Build the router for every page.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::index))
        .route("/logout", post(home::logout))
        // Admin
        .route("/admin/dashboard", get(admin::dashboard::index))
        .route("/admin/stores", post(admin::forms::create_store))
        .route("/admin/users", post(admin::forms::create_user))
        .route("/admin/stores/{id}/{action}", post(admin::stores::row_action))
        .route("/admin/users/{id}/{action}", post(admin::users::row_action))
        // Store owner
        .route("/store-owner/dashboard", get(store_owner::index))
        // User
        .route("/user/stores", get(user_stores::index))
        .route("/user/stores/{id}/rating", post(user_stores::submit_rating))
}
