//! Simulated backend.
//!
//! Stands in for a real API: every call waits a fixed delay and then resolves
//! with hardcoded fixtures. Submissions are accepted and discarded. With a
//! non-zero `failure_rate` a submission can fail at random, which exercises
//! the error notifications in the forms.

use std::time::Duration;

use rand::Rng;
use thiserror::Error;
use tracing::instrument;

use store_rating_core::{Score, StoreId};

use super::fixtures;
use crate::models::{NewStore, NewUser, OwnerStore, PlatformStats, RatingEntry, Store, User, UserStore};

/// Errors returned by the mock backend.
#[derive(Debug, Error)]
pub enum MockApiError {
    /// The simulated request failed.
    #[error("Mock backend unavailable during {0}")]
    Unavailable(&'static str),
}

/// Delays and failure behaviour of the mock backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockSettings {
    /// Delay before list and store fetches resolve.
    pub fetch_delay: Duration,
    /// Delay before platform stats resolve.
    pub stats_delay: Duration,
    /// Delay before create and rate submissions resolve.
    pub submit_delay: Duration,
    /// Probability in 0..=1 that a submission fails.
    pub failure_rate: f64,
}

impl Default for MockSettings {
    fn default() -> Self {
        Self {
            fetch_delay: Duration::from_millis(1000),
            stats_delay: Duration::from_millis(500),
            submit_delay: Duration::from_millis(1000),
            failure_rate: 0.0,
        }
    }
}

impl MockSettings {
    /// No delays and no failures.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            fetch_delay: Duration::ZERO,
            stats_delay: Duration::ZERO,
            submit_delay: Duration::ZERO,
            failure_rate: 0.0,
        }
    }

    /// Same settings with a different failure rate.
    #[must_use]
    pub const fn with_failure_rate(mut self, failure_rate: f64) -> Self {
        self.failure_rate = failure_rate;
        self
    }
}

/// The simulated backend.
#[derive(Debug, Clone)]
pub struct MockApi {
    settings: MockSettings,
}

impl MockApi {
    /// Create a mock backend with the given settings.
    #[must_use]
    pub const fn new(settings: MockSettings) -> Self {
        Self { settings }
    }

    // =========================================================================
    // Fetches
    // =========================================================================

    /// Stores for the admin store list.
    #[instrument(skip(self))]
    pub async fn fetch_stores(&self) -> Vec<Store> {
        wait(self.settings.fetch_delay).await;
        fixtures::admin_stores()
    }

    /// Accounts for the admin user list.
    #[instrument(skip(self))]
    pub async fn fetch_users(&self) -> Vec<User> {
        wait(self.settings.fetch_delay).await;
        fixtures::admin_users()
    }

    /// Users who rated the owner's store.
    #[instrument(skip(self))]
    pub async fn fetch_store_ratings(&self) -> Vec<RatingEntry> {
        wait(self.settings.fetch_delay).await;
        fixtures::store_ratings()
    }

    /// Stores for the end-user store browser.
    #[instrument(skip(self))]
    pub async fn fetch_user_stores(&self) -> Vec<UserStore> {
        wait(self.settings.fetch_delay).await;
        fixtures::user_stores()
    }

    /// Summary of the owner's store.
    #[instrument(skip(self))]
    pub async fn fetch_owner_store(&self) -> OwnerStore {
        wait(self.settings.fetch_delay).await;
        fixtures::owner_store()
    }

    /// Platform-wide totals.
    #[instrument(skip(self))]
    pub async fn fetch_platform_stats(&self) -> PlatformStats {
        wait(self.settings.stats_delay).await;
        fixtures::platform_stats()
    }

    // =========================================================================
    // Submissions
    // =========================================================================

    /// Create a store. Nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `MockApiError::Unavailable` when the simulated request fails.
    #[instrument(skip(self, store), fields(store_name = %store.name))]
    pub async fn create_store(&self, store: &NewStore) -> Result<(), MockApiError> {
        wait(self.settings.submit_delay).await;
        self.roll_failure("create_store")?;
        tracing::info!(email = %store.email, "Store created");
        Ok(())
    }

    /// Create a user account. Nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `MockApiError::Unavailable` when the simulated request fails.
    #[instrument(skip(self, user), fields(user_name = %user.name, role = %user.role))]
    pub async fn create_user(&self, user: &NewUser) -> Result<(), MockApiError> {
        wait(self.settings.submit_delay).await;
        self.roll_failure("create_user")?;
        tracing::info!(email = %user.email, "User created");
        Ok(())
    }

    /// Submit a rating for a store. Nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `MockApiError::Unavailable` when the simulated request fails.
    #[instrument(skip(self))]
    pub async fn submit_rating(&self, store_id: StoreId, score: Score) -> Result<(), MockApiError> {
        wait(self.settings.submit_delay).await;
        self.roll_failure("submit_rating")?;
        tracing::info!("Rating submitted");
        Ok(())
    }

    fn roll_failure(&self, operation: &'static str) -> Result<(), MockApiError> {
        let rate = self.settings.failure_rate;
        if rate > 0.0 && rand::rng().random::<f64>() < rate {
            tracing::warn!(operation, "Simulated backend failure");
            return Err(MockApiError::Unavailable(operation));
        }
        Ok(())
    }
}

async fn wait(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use store_rating_core::{Email, Role};

    fn new_store() -> NewStore {
        NewStore {
            name: "Corner Bakery".to_string(),
            email: Email::parse("hello@cornerbakery.com").unwrap(),
            address: "1 Market St".to_string(),
        }
    }

    fn new_user() -> NewUser {
        NewUser {
            name: "Priya Raghunathan Iyer".to_string(),
            email: Email::parse("priya@example.com").unwrap(),
            address: "2 Market St".to_string(),
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn test_fetches_return_fixtures() {
        let api = MockApi::new(MockSettings::instant());

        assert_eq!(api.fetch_stores().await, fixtures::admin_stores());
        assert_eq!(api.fetch_users().await, fixtures::admin_users());
        assert_eq!(api.fetch_store_ratings().await, fixtures::store_ratings());
        assert_eq!(api.fetch_user_stores().await, fixtures::user_stores());
        assert_eq!(api.fetch_owner_store().await.name, "Tech Haven");

        let stats = api.fetch_platform_stats().await;
        assert_eq!(stats.total_users, 124);
        assert_eq!(stats.total_stores, 48);
        assert_eq!(stats.total_ratings, 1256);
    }

    #[tokio::test]
    async fn test_submissions_succeed_without_failure_rate() {
        let api = MockApi::new(MockSettings::instant());

        assert!(api.create_store(&new_store()).await.is_ok());
        assert!(api.create_user(&new_user()).await.is_ok());
        let score = Score::new(4).unwrap();
        assert!(api.submit_rating(StoreId::new(2), score).await.is_ok());
    }

    #[tokio::test]
    async fn test_submissions_fail_at_full_failure_rate() {
        let api = MockApi::new(MockSettings::instant().with_failure_rate(1.0));

        let err = api.create_store(&new_store()).await.unwrap_err();
        assert!(matches!(err, MockApiError::Unavailable("create_store")));

        let err = api.create_user(&new_user()).await.unwrap_err();
        assert_eq!(err.to_string(), "Mock backend unavailable during create_user");

        let score = Score::new(1).unwrap();
        assert!(api.submit_rating(StoreId::new(1), score).await.is_err());
    }

    #[tokio::test]
    async fn test_failure_rate_does_not_affect_fetches() {
        let api = MockApi::new(MockSettings::instant().with_failure_rate(1.0));
        assert_eq!(api.fetch_stores().await.len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_configured_delay() {
        let api = MockApi::new(MockSettings::default());

        let start = tokio::time::Instant::now();
        let _ = api.fetch_users().await;
        assert!(start.elapsed() >= Duration::from_millis(1000));

        let start = tokio::time::Instant::now();
        let _ = api.fetch_platform_stats().await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(500));
        assert!(elapsed < Duration::from_millis(1000));
    }
}
