mod common;

use axum::http::{Method, StatusCode};
use axum_test::TestServer;
use serde_json::json;
use snipline::utils::id_generator::is_valid_id;

#[tokio::test]
async fn test_create_link_success() {
    let ctx = common::create_test_context();
    let server = TestServer::new(common::test_router(ctx.state.clone())).unwrap();

    let response = server
        .post("/links")
        .json(&json!({ "long": "https://example.com/some/long/path" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let id = body["id"].as_str().unwrap();
    assert_eq!(id.len(), 8);
    assert!(is_valid_id(id));
    assert_eq!(body["originalURL"], "https://example.com/some/long/path");
    assert!(body["createdAt"].as_str().is_some());

    let stored = ctx.repository.len().await;
    assert_eq!(stored, 1);
}

#[tokio::test]
async fn test_create_link_cors_headers() {
    let ctx = common::create_test_context();
    let server = TestServer::new(common::test_router(ctx.state)).unwrap();

    let response = server
        .post("/links")
        .json(&json!({ "long": "https://example.com/some/long/path" }))
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(
        response.header("access-control-allow-headers"),
        "Content-Type,Authorization"
    );
    assert_eq!(
        response.header("access-control-allow-methods"),
        "OPTIONS,POST,GET,PUT,DELETE"
    );
    assert_eq!(
        response.header("access-control-expose-headers"),
        "Content-Length"
    );
}

#[tokio::test]
async fn test_create_link_populates_cache() {
    let ctx = common::create_test_context();
    let server = TestServer::new(common::test_router(ctx.state.clone())).unwrap();

    let response = server
        .post("/links")
        .json(&json!({ "long": "https://example.com/cached/path" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    let id = body["id"].as_str().unwrap();

    assert_eq!(
        ctx.cache.url(id).await.as_deref(),
        Some("https://example.com/cached/path")
    );
    assert_eq!(ctx.cache.ttl(id).await, Some(common::TEST_CACHE_TTL));
}

#[tokio::test]
async fn test_create_link_via_put() {
    let ctx = common::create_test_context();
    let server = TestServer::new(common::test_router(ctx.state)).unwrap();

    let response = server
        .put("/links")
        .json(&json!({ "long": "https://example.com/from/the/web/form" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["originalURL"], "https://example.com/from/the/web/form");
}

#[tokio::test]
async fn test_create_link_empty_url() {
    let ctx = common::create_test_context();
    let server = TestServer::new(common::test_router(ctx.state.clone())).unwrap();

    let response = server.post("/links").json(&json!({ "long": "" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "URL cannot be empty");
    assert!(ctx.repository.is_empty().await);
}

#[tokio::test]
async fn test_create_link_too_short() {
    let ctx = common::create_test_context();
    let server = TestServer::new(common::test_router(ctx.state)).unwrap();

    let response = server
        .post("/links")
        .json(&json!({ "long": "short.url/a" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>();
    assert_eq!(
        body["error"]["message"],
        "URL must be at least 15 characters long"
    );
    assert_eq!(body["error"]["details"]["length"], 11);
}

#[tokio::test]
async fn test_create_link_invalid_format() {
    let ctx = common::create_test_context();
    let server = TestServer::new(common::test_router(ctx.state)).unwrap();

    let response = server
        .post("/links")
        .json(&json!({ "long": "not a valid url!" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Invalid URL format");
}

#[tokio::test]
async fn test_create_link_malformed_json() {
    let ctx = common::create_test_context();
    let server = TestServer::new(common::test_router(ctx.state)).unwrap();

    let response = server
        .post("/links")
        .bytes("{\"long\": ".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "Invalid JSON");
}

#[tokio::test]
async fn test_create_link_missing_field() {
    let ctx = common::create_test_context();
    let server = TestServer::new(common::test_router(ctx.state)).unwrap();

    let response = server
        .post("/links")
        .json(&json!({ "url": "https://example.com/some/long/path" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["message"], "Invalid JSON");
}

#[tokio::test]
async fn test_create_link_storage_failure() {
    let server = TestServer::new(common::test_router(common::create_failing_state())).unwrap();

    let response = server
        .post("/links")
        .json(&json!({ "long": "https://example.com/some/long/path" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "internal_error");
}

#[tokio::test]
async fn test_create_link_cache_failure_keeps_record() {
    let ctx = common::create_test_context();
    ctx.cache.set_failing(true);
    let server = TestServer::new(common::test_router(ctx.state.clone())).unwrap();

    let response = server
        .post("/links")
        .json(&json!({ "long": "https://example.com/some/long/path" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(ctx.repository.len().await, 1);
}

#[tokio::test]
async fn test_create_link_preflight() {
    let ctx = common::create_test_context();
    let server = TestServer::new(common::test_router(ctx.state)).unwrap();

    let response = server.method(Method::OPTIONS, "/links").await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_create_links_get_distinct_ids() {
    let ctx = common::create_test_context();
    let server = TestServer::new(common::test_router(ctx.state.clone())).unwrap();

    let mut ids = std::collections::HashSet::new();
    for _ in 0..20 {
        let response = server
            .post("/links")
            .json(&json!({ "long": "https://example.com/same/target" }))
            .await;
        response.assert_status_ok();
        let body = response.json::<serde_json::Value>();
        ids.insert(body["id"].as_str().unwrap().to_string());
    }

    assert_eq!(ids.len(), 20);
    assert_eq!(ctx.repository.len().await, 20);
}

#[tokio::test]
async fn test_create_link_ignores_content_type() {
    let ctx = common::create_test_context();
    let server = TestServer::new(common::test_router(ctx.state.clone())).unwrap();

    let response = server
        .post("/links")
        .bytes(r#"{"long":"https://example.com/some/long/path"}"#.into())
        .content_type("text/plain")
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["originalURL"], "https://example.com/some/long/path");
    assert_eq!(ctx.repository.len().await, 1);
}

#[tokio::test]
async fn test_create_link_form_encoded_json_body() {
    let ctx = common::create_test_context();
    let server = TestServer::new(common::test_router(ctx.state)).unwrap();

    let response = server
        .put("/links")
        .bytes(r#"{"long":"https://example.com/from/curl"}"#.into())
        .content_type("application/x-www-form-urlencoded")
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_create_link_error_carries_cors_headers() {
    let ctx = common::create_test_context();
    let server = TestServer::new(common::test_router(ctx.state)).unwrap();

    let response = server
        .post("/links")
        .json(&json!({ "long": "short.url/a" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.header("access-control-allow-origin"), "*");
    assert_eq!(
        response.header("access-control-allow-methods"),
        "OPTIONS,POST,GET,PUT,DELETE"
    );
}

#[tokio::test]
async fn test_create_link_storage_failure_carries_cors_headers() {
    let server = TestServer::new(common::test_router(common::create_failing_state())).unwrap();

    let response = server
        .post("/links")
        .json(&json!({ "long": "https://example.com/some/long/path" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
