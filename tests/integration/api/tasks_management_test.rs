// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, API_KEY};
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_and_get_task() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/tasks")
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "title": "Buy milk", "description": "2 litres" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created = response.json::<Value>();
    assert_eq!(created["title"], "Buy milk");
    assert_eq!(created["description"], "2 litres");
    assert_eq!(created["status"], "pending");
    assert!(created["id"].as_i64().unwrap() > 0);
    assert!(created["created_at"].is_string());

    let id = created["id"].as_i64().unwrap();
    let response = app
        .server
        .get(&format!("/tasks/{}", id))
        .add_header("X-API-Key", API_KEY)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), created);
}

#[tokio::test]
async fn test_create_with_status() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/tasks")
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "title": "Already going", "status": "in_progress" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["status"], "in_progress");
}

#[tokio::test]
async fn test_list_tasks_in_id_order() {
    let app = create_test_app().await;

    for title in ["one", "two", "three"] {
        app.server
            .post("/tasks")
            .add_header("X-API-Key", API_KEY)
            .json(&json!({ "title": title }))
            .await;
    }

    let response = app
        .server
        .get("/tasks")
        .add_header("X-API-Key", API_KEY)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let tasks = response.json::<Vec<Value>>();
    let titles: Vec<_> = tasks.iter().map(|t| t["title"].as_str().unwrap()).collect();
    assert_eq!(titles, vec!["one", "two", "three"]);
}

#[tokio::test]
async fn test_update_task_keeps_identity() {
    let app = create_test_app().await;

    let created = app
        .server
        .post("/tasks")
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "title": "Draft" }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/tasks/{}", id))
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "status": "completed" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated = response.json::<Value>();
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["title"], "Draft");
    assert_eq!(updated["status"], "completed");
    assert_eq!(updated["created_at"], created["created_at"]);

    let before: chrono::DateTime<chrono::FixedOffset> =
        serde_json::from_value(created["updated_at"].clone()).unwrap();
    let after: chrono::DateTime<chrono::FixedOffset> =
        serde_json::from_value(updated["updated_at"].clone()).unwrap();
    assert!(after > before);
}

#[tokio::test]
async fn test_update_with_empty_body_is_rejected() {
    let app = create_test_app().await;

    let created = app
        .server
        .post("/tasks")
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "title": "Untouched" }))
        .await
        .json::<Value>();
    let id = created["id"].as_i64().unwrap();

    let response = app
        .server
        .put(&format!("/tasks/{}", id))
        .add_header("X-API-Key", API_KEY)
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(body["error"]["message"], "No input data provided");
}

#[tokio::test]
async fn test_create_validation_errors() {
    let app = create_test_app().await;

    let empty_title = app
        .server
        .post("/tasks")
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "title": "" }))
        .await;
    assert_eq!(empty_title.status_code(), StatusCode::BAD_REQUEST);

    let missing_title = app
        .server
        .post("/tasks")
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "description": "no title" }))
        .await;
    assert_eq!(missing_title.status_code(), StatusCode::BAD_REQUEST);

    let bad_status = app
        .server
        .post("/tasks")
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "title": "t", "status": "archived" }))
        .await;
    assert_eq!(bad_status.status_code(), StatusCode::BAD_REQUEST);

    let no_body = app
        .server
        .post("/tasks")
        .add_header("X-API-Key", API_KEY)
        .await;
    assert_eq!(no_body.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        no_body.json::<Value>()["error"]["message"],
        "No input data provided"
    );
}

#[tokio::test]
async fn test_delete_task() {
    let app = create_test_app().await;

    let created = app
        .server
        .post("/tasks")
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "title": "Temporary" }))
        .await
        .json::<Value>();
    let path = format!("/tasks/{}", created["id"].as_i64().unwrap());

    let response = app.server.delete(&path).add_header("X-API-Key", API_KEY).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = app.server.get(&path).add_header("X-API-Key", API_KEY).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");

    let response = app.server.delete(&path).add_header("X-API-Key", API_KEY).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_task_returns_not_found() {
    let app = create_test_app().await;

    let response = app
        .server
        .put("/tasks/4242")
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "title": "ghost" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_numeric_task_id_is_json_error() {
    let app = create_test_app().await;

    for response in [
        app.server.get("/tasks/abc").add_header("X-API-Key", API_KEY).await,
        app.server
            .put("/tasks/abc")
            .add_header("X-API-Key", API_KEY)
            .json(&json!({ "title": "x" }))
            .await,
        app.server.delete("/tasks/abc").add_header("X-API-Key", API_KEY).await,
    ] {
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["error"]["code"], "validation_error");
    }
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/nowhere")
        .add_header("X-API-Key", API_KEY)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_truncated_json_is_not_reported_as_missing_input() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/tasks")
        .add_header("X-API-Key", API_KEY)
        .add_header("content-type", "application/json")
        .bytes(r#"{"title":"#.into())
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
    assert_ne!(body["error"]["message"], "No input data provided");
}
