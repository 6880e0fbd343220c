mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use url_shortener_mem::api::handlers::redirect_handler;
use url_shortener_mem::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_redirect_success() {
    let (state, repo) = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_link(&repo, "redir1", "https://example.com/target").await;

    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_counts_clicks() {
    let (state, repo) = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_link(&repo, "count1", "https://example.com").await;

    for _ in 0..3 {
        server.get("/count1").await;
    }

    let link = repo.find_by_code("count1").await.unwrap().unwrap();
    assert_eq!(link.clicks, 3);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let (state, _repo) = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/zzzzzz").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Short code not found");
}

#[tokio::test]
async fn test_redirect_malformed_code_not_found() {
    let (state, _repo) = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    server.get("/favicon.ico").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_prefix_only_url() {
    let (state, repo) = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_link(&repo, "bare01", "http://").await;

    let response = server.get("/bare01").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "http://");
}

#[tokio::test]
async fn test_redirect_unencodable_location_is_internal_error() {
    let (state, repo) = common::create_test_state();
    let app = Router::new()
        .route("/{code}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    // Inserted below the service, bypassing URL validation
    common::create_test_link(&repo, "badhdr", "https://example.com/a\nb").await;

    let response = server.get("/badhdr").await;

    assert_eq!(response.status_code(), 500);
    assert!(response.headers().get("location").is_none());

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "internal_error");
}
