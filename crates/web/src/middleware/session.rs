//! Session middleware configuration.
//!
//! Sessions live in process memory and hold only pending notifications and
//! the visitor's submitted scores, so losing them on restart is harmless.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::RatingConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "store_rating_session";

/// Session expiry time in seconds (24 hours).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with an in-memory store.
///
/// Cookies are marked `Secure` when the configured base URL is HTTPS.
#[must_use]
pub fn create_session_layer(config: &RatingConfig) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}
