//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::RatingConfig;
use crate::services::MockApi;

/// Application state shared across all handlers.
///
/// Cheap to clone; the contents live behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: RatingConfig,
    api: MockApi,
}

impl AppState {
    /// Build the state from configuration.
    #[must_use]
    pub fn new(config: RatingConfig) -> Self {
        let api = MockApi::new(config.mock);
        Self {
            inner: Arc::new(AppStateInner { config, api }),
        }
    }

    /// Returns a reference to the configuration.
    #[must_use]
    pub fn config(&self) -> &RatingConfig {
        &self.inner.config
    }

    /// Returns a reference to the mock backend.
    #[must_use]
    pub fn api(&self) -> &MockApi {
        &self.inner.api
    }
}
