//! Session-related types.
//!
//! The session carries two things between requests: notifications waiting
//! to be shown on the next page, and the scores the visitor has submitted in
//! the store browser.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use store_rating_core::{Score, StoreId};

/// Visual style of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

/// A notification shown once, on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: ToastVariant,
}

impl Toast {
    /// A regular notification.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }

    /// A notification styled as an error or destructive action.
    #[must_use]
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: ToastVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    /// CSS class for the toast container.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.variant {
            ToastVariant::Default => "toast",
            ToastVariant::Destructive => "toast toast-destructive",
        }
    }
}

/// A score the visitor gave a store during this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmittedRating {
    pub store_id: StoreId,
    pub score: Score,
}

/// Session keys.
pub mod keys {
    /// Key for notifications pending display.
    pub const TOASTS: &str = "toasts";

    /// Key for the scores submitted in the store browser.
    pub const SUBMITTED_RATINGS: &str = "submitted_ratings";
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Queue a notification for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session store cannot be read or written.
pub async fn push_toast(
    session: &Session,
    toast: Toast,
) -> Result<(), tower_sessions::session::Error> {
    let mut toasts: Vec<Toast> = session.get(keys::TOASTS).await?.unwrap_or_default();
    toasts.push(toast);
    session.insert(keys::TOASTS, toasts).await
}

/// Remove and return every pending notification.
///
/// A broken session only costs the notifications, so errors are logged and
/// treated as "nothing pending".
pub async fn take_toasts(session: &Session) -> Vec<Toast> {
    match session.remove::<Vec<Toast>>(keys::TOASTS).await {
        Ok(toasts) => toasts.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Failed to read toasts from session: {e}");
            vec![]
        }
    }
}

/// Scores submitted during this session.
pub async fn submitted_ratings(session: &Session) -> Vec<SubmittedRating> {
    session
        .get::<Vec<SubmittedRating>>(keys::SUBMITTED_RATINGS)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Record a submitted score, replacing an earlier one for the same store.
///
/// # Errors
///
/// Returns an error if the session store cannot be read or written.
pub async fn record_rating(
    session: &Session,
    rating: SubmittedRating,
) -> Result<(), tower_sessions::session::Error> {
    let mut ratings: Vec<SubmittedRating> = session
        .get(keys::SUBMITTED_RATINGS)
        .await?
        .unwrap_or_default();
    upsert_rating(&mut ratings, rating);
    session.insert(keys::SUBMITTED_RATINGS, ratings).await
}

fn upsert_rating(ratings: &mut Vec<SubmittedRating>, rating: SubmittedRating) {
    if let Some(existing) = ratings.iter_mut().find(|r| r.store_id == rating.store_id) {
        existing.score = rating.score;
    } else {
        ratings.push(rating);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rating(store: i32, score: u8) -> SubmittedRating {
        SubmittedRating {
            store_id: StoreId::new(store),
            score: Score::new(score).unwrap(),
        }
    }

    #[test]
    fn test_toast_variants() {
        let toast = Toast::new("Rating submitted", "You rated Tech Haven 4 out of 5 stars.");
        assert_eq!(toast.variant, ToastVariant::Default);
        assert_eq!(toast.css_class(), "toast");

        let toast = Toast::destructive("Delete Store", "Deleting Tech Shyam");
        assert_eq!(toast.variant, ToastVariant::Destructive);
        assert_eq!(toast.title, "Delete Store");
        assert_eq!(toast.css_class(), "toast toast-destructive");
    }

    #[test]
    fn test_toast_serde_defaults_variant() {
        let toast: Toast =
            serde_json::from_str(r#"{"title":"Logged out","description":"Bye"}"#).unwrap();
        assert_eq!(toast.variant, ToastVariant::Default);

        let json = serde_json::to_value(Toast::destructive("Error", "Oops")).unwrap();
        assert_eq!(json["variant"], "destructive");
    }

    #[test]
    fn test_upsert_rating_replaces_same_store() {
        let mut ratings = vec![rating(1, 4), rating(2, 3)];

        upsert_rating(&mut ratings, rating(2, 5));
        assert_eq!(ratings, vec![rating(1, 4), rating(2, 5)]);

        upsert_rating(&mut ratings, rating(5, 1));
        assert_eq!(ratings.len(), 3);
        assert_eq!(ratings[2], rating(5, 1));
    }

    #[test]
    fn test_submitted_rating_serde() {
        let json = serde_json::to_string(&rating(3, 4)).unwrap();
        assert_eq!(json, r#"{"store_id":3,"score":4}"#);

        let bad = serde_json::from_str::<SubmittedRating>(r#"{"store_id":3,"score":9}"#);
        assert!(bad.is_err());
    }
}
