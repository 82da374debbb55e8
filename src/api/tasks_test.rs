//! Integration tests for the task API endpoints.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::api::{AppState, Config, create_router};
use crate::db::{Database, sqlite::SqliteDatabase};

async fn test_app() -> axum::Router {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");

    create_router(AppState::new(db), false)
}

async fn json_body(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

fn post_task(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/tasks")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn root_acknowledges() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().contains("running"));
}

#[test]
fn config_serves_frontend_by_default() {
    assert!(Config::default().serve_frontend);
}

#[tokio::test(flavor = "multi_thread")]
async fn frontend_mode_serves_the_app_shell_at_root() {
    let db = SqliteDatabase::in_memory()
        .await
        .expect("Failed to create test database");
    db.migrate().await.expect("Failed to run migrations");
    let app = create_router(AppState::new(db), true);

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test(flavor = "multi_thread")]
async fn health_returns_ok() {
    let app = test_app().await;

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test(flavor = "multi_thread")]
async fn list_starts_empty() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/tasks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_echoes_client_minted_id() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post_task(json!({
            "id": 1001,
            "title": "Write report",
            "category": "Work",
            "status": "In Progress",
            "dueDate": "2025-06-01"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert_eq!(body["id"], 1001);
    assert_eq!(body["status"], "In Progress");
    assert_eq!(body["dueDate"], "2025-06-01");
    assert!(body["createdAt"].is_string());
    assert!(body["updatedAt"].is_string());
}

#[tokio::test(flavor = "multi_thread")]
async fn create_without_id_mints_one() {
    let app = test_app().await;

    let response = app
        .oneshot(post_task(json!({"title": "t", "category": "c"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = json_body(response).await;
    assert!(body["id"].as_i64().unwrap() > 0);
    // Status defaults to the first column.
    assert_eq!(body["status"], "To Do");
}

#[tokio::test(flavor = "multi_thread")]
async fn create_with_blank_title_is_unprocessable() {
    let app = test_app().await;

    let response = app
        .oneshot(post_task(json!({"title": "  ", "category": "c"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_with_unknown_status_is_unprocessable() {
    let app = test_app().await;

    let response = app
        .oneshot(post_task(
            json!({"title": "t", "category": "c", "status": "Done"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test(flavor = "multi_thread")]
async fn create_with_taken_id_is_conflict() {
    let app = test_app().await;

    let first = app
        .clone()
        .oneshot(post_task(json!({"id": 7, "title": "a", "category": "c"})))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(post_task(json!({"id": 7, "title": "b", "category": "c"})))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test(flavor = "multi_thread")]
async fn replace_overwrites_all_fields() {
    let app = test_app().await;

    app.clone()
        .oneshot(post_task(json!({"id": 7, "title": "Old", "category": "c"})))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/tasks/7")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({
                        "title": "New",
                        "category": "Home",
                        "status": "Completed"
                    }))
                    .unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["id"], 7);
    assert_eq!(body["title"], "New");
    assert_eq!(body["status"], "Completed");
    // dueDate was not sent, so the wire omits it.
    assert!(body.get("dueDate").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn replace_of_absent_task_is_not_found() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/tasks/999")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&json!({"title": "t", "category": "c"})).unwrap(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_returns_no_content_and_is_idempotent() {
    let app = test_app().await;

    app.clone()
        .oneshot(post_task(json!({"id": 5, "title": "t", "category": "c"})))
        .await
        .unwrap();

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/tasks/5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/tasks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = json_body(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn list_returns_tasks_in_creation_order() {
    let app = test_app().await;

    for (id, title) in [(3, "c"), (1, "a"), (2, "b")] {
        app.clone()
            .oneshot(post_task(json!({"id": id, "title": title, "category": "x"})))
            .await
            .unwrap();
    }

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/tasks")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = json_body(response).await;
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}
