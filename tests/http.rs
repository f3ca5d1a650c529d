//! HTTP contract tests, driven through the router with `oneshot`.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use basilica::api;
use common::{harness, world};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn check(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/check-article-categories")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_check_article_categories() {
    let h = harness(world());
    let app = api::router(h.ctx.clone());

    let (status, body) = send(
        app,
        check(json!({
            "titles": ["Ada Lovelace", "Olympic Games", "Saint Basil", "Battle of Hastings"],
            "blockedCategories": ["People", "History", "Religion"]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "blockedLinks": {
                "Ada Lovelace": "People",
                "Olympic Games": null,
                "Saint Basil": null,
                "Battle of Hastings": "History"
            }
        })
    );
}

#[tokio::test]
async fn test_unknown_category_is_bad_request() {
    let h = harness(world());
    let app = api::router(h.ctx.clone());

    let (status, body) = send(
        app,
        check(json!({ "titles": ["Ada Lovelace"], "blockedCategories": ["Sports"] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("[UNKNOWN_CATEGORY]"), "{}", message);
    assert_eq!(h.graph.calls(), Default::default());
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let h = harness(world());
    let app = api::router(h.ctx.clone());

    let (status, body) = send(app, check(json!({ "titles": "Ada Lovelace" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("[VALIDATION_ERROR]"), "{}", message);
    assert_eq!(h.graph.calls(), Default::default());
}

#[tokio::test]
async fn test_non_json_body_uses_error_shape() {
    let h = harness(world());
    let app = api::router(h.ctx.clone());

    let request = Request::builder()
        .method("POST")
        .uri("/check-article-categories")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("[VALIDATION_ERROR]"));
}

#[tokio::test]
async fn test_health() {
    let h = harness(world());
    let app = api::router(h.ctx.clone());

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["mappedClasses"], 6);
}
