//! End-to-end test harness for the store rating dashboards.
//!
//! Each [`TestApp`] runs the full router, middleware included, on an
//! ephemeral local port with the mock backend's delays turned off. The
//! client keeps cookies, so notifications queued in the session by one
//! request show up on the page the redirect lands on.
//!
//! ```rust,ignore
//! let app = TestApp::spawn().await;
//! let body = app.get_text("/admin/dashboard").await;
//! assert!(body.contains("Total Stores"));
//! ```

#![allow(clippy::missing_panics_doc)]

use std::net::SocketAddr;

use reqwest::{Client, Response};
use tokio::net::TcpListener;

use store_rating_web::{
    app,
    config::RatingConfig,
    services::mock_api::MockSettings,
    state::AppState,
};

/// A running server plus a cookie-keeping client.
pub struct TestApp {
    pub address: SocketAddr,
    pub client: Client,
}

impl TestApp {
    /// Start a server whose mock backend never fails.
    pub async fn spawn() -> Self {
        Self::spawn_with(MockSettings::instant()).await
    }

    /// Start a server whose mock backend fails every submission.
    pub async fn spawn_failing() -> Self {
        Self::spawn_with(MockSettings::instant().with_failure_rate(1.0)).await
    }

    /// Start a server with the given mock backend settings.
    pub async fn spawn_with(mock: MockSettings) -> Self {
        let config = RatingConfig {
            port: 0,
            mock,
            ..RatingConfig::default()
        };

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let address = listener.local_addr().expect("Failed to read local address");
        let router = app(AppState::new(config));

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Test server failed");
        });

        let client = Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to create HTTP client");

        Self { address, client }
    }

    /// Absolute URL for `path`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.address)
    }

    pub async fn get(&self, path: &str) -> Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("GET request failed")
    }

    /// GET `path` and return the body, asserting a 200.
    pub async fn get_text(&self, path: &str) -> String {
        let resp = self.get(path).await;
        assert_eq!(resp.status(), 200, "GET {path}");
        resp.text().await.expect("Failed to read body")
    }

    /// POST a url-encoded form, following redirects.
    pub async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .expect("POST request failed")
    }
}
