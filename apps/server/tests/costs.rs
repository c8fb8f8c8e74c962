use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
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

fn add_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/add")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn full_payload() -> serde_json::Value {
    serde_json::json!({
        "description": "test item",
        "category": "food",
        "userid": 123123,
        "sum": 50,
        "date": "2025-05-30"
    })
}

async fn body_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn add_cost_echoes_the_submission() {
    let (app, _tmp) = test_app().await;

    let response = app.oneshot(add_request(full_payload())).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let cost = body_json(response).await;
    assert_eq!(cost["description"], "test item");
    assert_eq!(cost["category"], "food");
    assert_eq!(cost["userid"], serde_json::json!(123123));
    assert_eq!(cost["sum"], serde_json::json!(50.0));
    assert_eq!(cost["date"], "2025-05-30");
    assert!(cost["id"].is_string());
}

#[tokio::test]
async fn any_missing_required_field_is_400() {
    let (app, _tmp) = test_app().await;

    for field in ["description", "category", "userid", "sum"] {
        let mut payload = full_payload();
        payload.as_object_mut().unwrap().remove(field);

        let response = app.clone().oneshot(add_request(payload)).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "missing field {field}"
        );
        let body = body_json(response).await;
        assert!(body["error"].as_str().unwrap().contains(field));
    }
}

#[tokio::test]
async fn add_cost_for_unknown_user_is_404() {
    let (app, _tmp) = test_app().await;

    let mut payload = full_payload();
    payload["userid"] = serde_json::json!(999999);

    let response = app.oneshot(add_request(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_category_is_400() {
    let (app, _tmp) = test_app().await;

    let mut payload = full_payload();
    payload["category"] = serde_json::json!("vacations");

    let response = app.oneshot(add_request(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_date_is_400() {
    let (app, _tmp) = test_app().await;

    let mut payload = full_payload();
    payload["date"] = serde_json::json!("30-05-2025");

    let response = app.oneshot(add_request(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn omitted_date_defaults_to_today() {
    let (app, _tmp) = test_app().await;

    let mut payload = full_payload();
    payload.as_object_mut().unwrap().remove("date");

    let response = app.oneshot(add_request(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let cost = body_json(response).await;
    let date = cost["date"].as_str().unwrap();
    assert!(NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
}
