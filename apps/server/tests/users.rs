use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use costmanager_server::{api::app_router, build_state, config::Config};

async fn test_app() -> (Router, TempDir) {
    let tmp = TempDir::new().unwrap();
    let config = Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path: tmp.path().join("test.db").to_string_lossy().into_owned(),
        cors_allow: vec!["*".to_string()],
        request_timeout: std::time::Duration::from_secs(5),
    };
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), tmp)
}

fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn seeded_user_starts_with_zero_total() {
    let (app, _tmp) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/123123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let user = body_json(response).await;
    assert_eq!(user["id"], serde_json::json!(123123));
    assert!(user["first_name"].is_string());
    assert!(user["last_name"].is_string());
    assert_eq!(user["total"], serde_json::json!(0.0));
}

#[tokio::test]
async fn unknown_user_is_404() {
    let (app, _tmp) = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/999999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn total_reflects_added_costs() {
    let (app, _tmp) = test_app().await;

    for (sum, date) in [(50.0, "2025-05-30"), (25.5, "2025-06-02")] {
        let response = app
            .clone()
            .oneshot(json_request(
                "/api/add",
                serde_json::json!({
                    "description": "test item",
                    "category": "food",
                    "userid": 123123,
                    "sum": sum,
                    "date": date
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/users/123123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let user = body_json(response).await;
    assert_eq!(user["total"], serde_json::json!(75.5));
}
