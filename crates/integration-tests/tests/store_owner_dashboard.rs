//! End-to-end tests for the store owner dashboard.

use store_rating_integration_tests::TestApp;

#[tokio::test]
async fn test_summary_and_ratings_table() {
    let app = TestApp::spawn().await;
    let body = app.get_text("/store-owner/dashboard").await;

    assert!(body.contains("Tech Haven Dashboard"));
    assert!(body.contains("4.2/5.0"));
    assert!(body.contains("Users Who Rated Your Store"));
    assert!(body.contains("star star-partial"));
    assert!(body.contains("June 20, 2023"));
    assert!(body.contains(">AG<"));
}

#[tokio::test]
async fn test_ratings_sorted_by_date_descending() {
    let app = TestApp::spawn().await;
    let body = app
        .get_text("/store-owner/dashboard?tab=users&sort=date&dir=desc")
        .await;

    let newest = body.find("Akanksha Gupta").unwrap_or(usize::MAX);
    let oldest = body.find("Shyam Kumar").unwrap_or(0);
    assert!(newest < oldest);
    assert!(body.contains("Sorted by date ↓"));
}

#[tokio::test]
async fn test_ratings_search_without_match() {
    let app = TestApp::spawn().await;
    let body = app
        .get_text("/store-owner/dashboard?tab=users&q=nobody")
        .await;

    assert!(body.contains("No users found"));
    assert!(!body.contains("aku@example.com"));
}

#[tokio::test]
async fn test_analytics_tab_shows_distribution() {
    let app = TestApp::spawn().await;
    let body = app.get_text("/store-owner/dashboard?tab=analytics").await;

    assert!(body.contains("Rating Analytics"));
    assert!(body.contains(r#"<progress max="100" value="33">"#));
    assert!(body.contains("1 star"));
    assert!(body.contains("<strong>3.8</strong>"));
}
