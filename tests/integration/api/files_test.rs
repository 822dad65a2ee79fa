// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, API_KEY};
use axum::http::StatusCode;
use serde_json::Value;
use taskscrape::domain::repositories::storage_repository::ContentStore;

#[tokio::test]
async fn test_get_saved_file() {
    let app = create_test_app().await;
    let name = app
        .store
        .save_text("example.com_notes", "remember the milk")
        .await
        .unwrap();

    let response = app
        .server
        .get(&format!("/files/{}", name))
        .add_header("X-API-Key", API_KEY)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "remember the milk");
}

#[tokio::test]
async fn test_unknown_file_is_not_found() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/files/missing-0123456789ab.txt")
        .add_header("X-API-Key", API_KEY)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[tokio::test]
async fn test_traversal_names_are_not_found() {
    let app = create_test_app().await;
    // A file outside the content directory that must stay unreachable
    std::fs::write(app.temp_dir.path().join("secret.txt"), "top secret").unwrap();

    for name in ["..%2Fsecret.txt", "..", ".hidden", "..secret.txt", "a%5C..%5Csecret.txt"] {
        let response = app
            .server
            .get(&format!("/files/{}", name))
            .add_header("X-API-Key", API_KEY)
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "{}", name);
    }
}
