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

async fn fetch_roster(uri: &str) -> serde_json::Value {
    let (app, _tmp) = test_app().await;
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.contains("application/json"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn about_returns_fixed_roster() {
    let roster = fetch_roster("/api/about").await;
    assert_eq!(
        roster,
        serde_json::json!([
            { "first_name": "Yaakov", "last_name": "Israeli" },
            { "first_name": "Koren", "last_name": "Abugov" }
        ])
    );
}

#[tokio::test]
async fn about_is_also_served_without_api_prefix() {
    assert_eq!(
        fetch_roster("/about").await,
        fetch_roster("/api/about").await
    );
}
