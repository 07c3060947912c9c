//! Integration tests for the flag admin handler.
//!
//! These drive the handler through its `RequestHandler` impl, the way an
//! embedding server would.

use flagset::prelude::*;
use flagset::{FORM_URLENCODED, HttpMethod};
use flagset_testing::*;
use std::sync::Arc;

fn setup() -> (Arc<FlagSet>, TestClient) {
    let features = Arc::new(FlagSet::new());
    let admin = features.admin().unwrap();
    (features, TestClient::new(Arc::new(admin)))
}

// =============================================================================
// Boolean Flags
// =============================================================================

#[tokio::test]
async fn test_toggle_boolean_flag() {
    let (features, client) = setup();
    let (scream, result) = features.new_flag("scream");
    result.unwrap();

    let response = client.get("/scream").await;
    assert_status(&response, 200);
    assert_body(&response, "scream: false");

    let response = client.post("/scream?enabled=true", Vec::new()).await;
    assert_status(&response, 200);
    assert!(scream.is_enabled());

    let response = client.get("/scream").await;
    assert_body(&response, "scream: true");

    // no parameters at all is rejected and changes nothing
    let response = client.post("/scream", Vec::new()).await;
    assert_status(&response, 400);
    assert!(scream.is_enabled());
}

#[tokio::test]
async fn test_checkbox_form_round_trip() {
    let (features, client) = setup();
    let (scream, _) = features.new_flag("scream");

    let response = client.post_form("/features/scream", "enabled=true").await;
    assert_status(&response, 200);
    assert!(scream.is_enabled());

    // an unticked checkbox submits nothing
    let response = client.post_form("/features/scream", "").await;
    assert_status(&response, 200);
    assert_body(&response, "scream: false");
    assert!(!scream.is_enabled());
}

// =============================================================================
// Ratio Flags
// =============================================================================

#[tokio::test]
async fn test_enable_ratio_flag() {
    let (features, client) = setup();
    let surprise = Arc::new(RatioFlag::new("surprise", 0.1));
    features.add(surprise.clone()).unwrap();

    let response = client.post("/surprise?enabled=true", Vec::new()).await;
    assert_status(&response, 200);
    assert_body(&response, "surprise: true (ratio=0.10)");

    let hits = (0..10_000).filter(|_| surprise.is_enabled()).count();
    assert!((700..=1_300).contains(&hits), "{hits}/10000");
}

#[tokio::test]
async fn test_ratio_slider_form() {
    let (features, client) = setup();
    let surprise = Arc::new(RatioFlag::new("surprise", 0.1));
    features.add(surprise.clone()).unwrap();

    let response = client
        .post_form("/features/surprise", "enabled=true&ratio=0.42")
        .await;
    assert_body(&response, "surprise: true (ratio=0.42)");

    let response = client.post("/features/surprise?ratio=2e-1", Vec::new()).await;
    assert_status(&response, 200);
    assert_body(&response, "surprise: true (ratio=0.20)");

    let response = client.post("/features/surprise?ratio=most", Vec::new()).await;
    assert_client_error(&response);
    assert_eq!(surprise.ratio(), 0.2);
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_plain_index() {
    let (features, client) = setup();
    features.new_flag("scream").1.unwrap();
    features
        .add(Arc::new(RatioFlag::new("surprise", 0.5)))
        .unwrap();
    features.new_flag("beta").1.unwrap();

    let response = client.get("/features/").await;
    assert_status(&response, 200);
    assert_body(
        &response,
        "Flags:\n\nbeta: false\nscream: false\nsurprise: false (ratio=0.50)\n",
    );
}

#[tokio::test]
async fn test_html_index_with_custom_title() {
    let features = Arc::new(FlagSet::new());
    features.new_flag("scream").1.unwrap();
    let admin = FlagAdmin::with_config(
        Arc::clone(&features),
        AdminConfig::new().with_title("Switchboard"),
    )
    .unwrap();
    let client = TestClient::new(Arc::new(admin));

    let request = TestRequestBuilder::new(HttpMethod::GET, "/features/")
        .header("Accept", "text/html")
        .build();
    let response = client.send(request).await;

    assert_status(&response, 200);
    assert_html_content_type(&response);
    assert_body_contains(&response, "<title>Switchboard</title>");
    assert_body_contains(&response, r#"<form id="feature-scream""#);
}

#[tokio::test]
async fn test_flags_added_after_mounting_are_visible() {
    let (features, client) = setup();
    assert_body(&client.get("/").await, "Flags:\n\n");

    features.new_flag("late").1.unwrap();
    assert_body(&client.get("/").await, "Flags:\n\nlate: false\n");
}

// =============================================================================
// Errors and Redirects
// =============================================================================

#[tokio::test]
async fn test_unknown_flag_and_bad_method() {
    let (features, client) = setup();
    features.new_flag("scream").1.unwrap();

    let response = client.get("/nope").await;
    assert_status(&response, 404);
    assert_body(&response, "no such feature\n");

    let response = client.request(HttpMethod::PUT, "/scream").await;
    assert_status(&response, 405);

    let response = client.request(HttpMethod::DELETE, "/").await;
    assert_status(&response, 405);
}

#[tokio::test]
async fn test_update_redirects_to_referer() {
    let (features, client) = setup();
    let (scream, _) = features.new_flag("scream");

    let request = TestRequestBuilder::new(HttpMethod::POST, "/features/scream")
        .header("Referer", "https://admin.example.com/features/")
        .form("enabled=true")
        .build();
    let response = client.send(request).await;

    assert_status(&response, 307);
    assert_header(&response, "Location", "https://admin.example.com/features/");
    assert!(scream.is_enabled());
}

#[tokio::test]
async fn test_malformed_form_body() {
    let (features, client) = setup();
    features.new_flag("scream").1.unwrap();

    let request = TestRequestBuilder::new(HttpMethod::POST, "/scream")
        .header("Content-Type", FORM_URLENCODED)
        .body(b"enabled=%G0".to_vec())
        .build();
    let response = client.send(request).await;

    assert_status(&response, 400);
    assert_body(&response, "invalid parameters\n");
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_admin_updates_and_reads() {
    let features = Arc::new(FlagSet::new());
    let (scream, _) = features.new_flag("scream");
    let admin = Arc::new(features.admin().unwrap());

    let mut tasks = Vec::new();
    for i in 0..16 {
        let admin = Arc::clone(&admin);
        let scream = Arc::clone(&scream);
        tasks.push(tokio::spawn(async move {
            let enabled = i % 2 == 0;
            let path = format!("/scream?enabled={enabled}");
            let response = admin.handle(HttpRequest::post(path)).await.unwrap();
            assert_eq!(response.status, 200);
            let _ = scream.is_enabled();
        }));
    }

    for task in tasks {
        task.await.unwrap();
    }

    let body = admin.serve(&HttpRequest::get("/scream")).body_string();
    assert!(body == "scream: true" || body == "scream: false", "{body}");
}
