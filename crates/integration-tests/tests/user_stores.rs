//! End-to-end tests for the store browser and rating submission.

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use store_rating_integration_tests::TestApp;

#[tokio::test]
async fn test_store_cards() {
    let app = TestApp::spawn().await;
    let body = app.get_text("/user/stores").await;

    assert!(body.contains("Browse Stores"));
    assert!(body.contains("Bookworm&#39;s Paradise") || body.contains("Bookworm&#x27;s Paradise"));
    assert_eq!(body.matches("Change Rating").count(), 4);
    assert_eq!(body.matches("Rate This Store").count(), 2);
    assert!(!body.contains("rating-picker"));
}

#[tokio::test]
async fn test_search_matches_address() {
    let app = TestApp::spawn().await;

    let body = app.get_text("/user/stores?q=lexington").await;
    assert!(body.contains("Bookworm"));
    assert!(!body.contains("Grocery Express"));

    let body = app.get_text("/user/stores?q=chicago").await;
    assert!(body.contains("No stores found matching your search criteria."));
}

#[tokio::test]
async fn test_picker_opens_on_one_card() {
    let app = TestApp::spawn().await;
    let body = app.get_text("/user/stores?rate=2").await;

    assert_eq!(body.matches("rating-picker").count(), 1);
    assert!(body.contains(r#"action="/user/stores/2/rating""#));
    assert_eq!(body.matches(r#"name="rating""#).count(), 5);
    assert!(body.contains("Cancel"));
}

#[tokio::test]
async fn test_malformed_rate_is_ignored() {
    let app = TestApp::spawn().await;

    for path in ["/user/stores?rate=abc", "/user/stores?rate=", "/user/stores?q=park&rate=x"] {
        let body = app.get_text(path).await;
        assert!(body.contains("Browse Stores"), "{path}");
        assert!(!body.contains("rating-picker"), "{path}");
    }
}

#[tokio::test]
async fn test_submit_rating_updates_card() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form("/user/stores/2/rating", &[("rating", "5"), ("q", "")])
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.url().as_str().ends_with("/user/stores"));
    let body = resp.text().await.unwrap();
    assert!(body.contains("Rating submitted"));
    assert!(body.contains("You rated Tech Haven 5 out of 5 stars."));
    assert_eq!(body.matches("Change Rating").count(), 5);

    let body = app.get_text("/user/stores").await;
    assert!(!body.contains("Rating submitted"));
    assert_eq!(body.matches("Change Rating").count(), 5);
}

#[tokio::test]
async fn test_submit_rating_keeps_search() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form("/user/stores/4/rating", &[("rating", "1"), ("q", "park")])
        .await;
    assert!(resp.url().as_str().ends_with("/user/stores?q=park"));
    let body = resp.text().await.unwrap();
    assert!(body.contains("Home Essentials"));
    assert!(!body.contains("Tech Haven"));
}

#[tokio::test]
async fn test_submit_rating_rejects_bad_input() {
    let app = TestApp::spawn().await;

    let resp = app.post_form("/user/stores/2/rating", &[("rating", "6")]).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app.post_form("/user/stores/2/rating", &[("rating", "five")]).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app.post_form("/user/stores/42/rating", &[("rating", "3")]).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_submit_failure_reopens_picker() {
    let app = TestApp::spawn_failing().await;

    let resp = app.post_form("/user/stores/2/rating", &[("rating", "4")]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.url().as_str().ends_with("/user/stores?rate=2"));
    let body = resp.text().await.unwrap();
    assert!(body.contains("There was an error submitting your rating. Please try again."));
    assert_eq!(body.matches("rating-picker").count(), 1);
    assert_eq!(body.matches("Change Rating").count(), 4);
}

#[tokio::test]
async fn test_logout_clears_session() {
    let app = TestApp::spawn().await;

    app.post_form("/user/stores/2/rating", &[("rating", "5")]).await;
    let resp = app.post_form("/logout", &[]).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("You have been logged out successfully."));

    let body = app.get_text("/user/stores").await;
    assert_eq!(body.matches("Change Rating").count(), 4);
}

#[tokio::test]
async fn test_health_and_security_headers() {
    let app = TestApp::spawn().await;
    let resp = app.get("/health").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("content-security-policy"));
    assert!(resp.headers().contains_key("x-request-id"));
}
