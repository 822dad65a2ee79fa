// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_app;
use axum::http::{Method, StatusCode};
use serde_json::{json, Value};

/// 所有端点在缺少或错误的API密钥时返回401
#[tokio::test]
async fn test_every_endpoint_requires_api_key() {
    let app = create_test_app().await;

    let endpoints = [
        (Method::GET, "/tasks"),
        (Method::POST, "/tasks"),
        (Method::GET, "/tasks/1"),
        (Method::PUT, "/tasks/1"),
        (Method::DELETE, "/tasks/1"),
        (Method::POST, "/scrape"),
        (Method::GET, "/files/page-0123456789ab.txt"),
    ];

    for (method, path) in endpoints {
        for key in [None, Some("wrong-key")] {
            let mut request = app
                .server
                .method(method.clone(), path)
                .json(&json!({ "title": "x", "url": "http://127.0.0.1:1/" }));
            if let Some(key) = key {
                request = request.add_header("X-API-Key", key);
            }
            let response = request.await;

            assert_eq!(
                response.status_code(),
                StatusCode::UNAUTHORIZED,
                "{} {} with key {:?}",
                method,
                path,
                key
            );
            assert_eq!(response.json::<Value>()["error"]["code"], "unauthorized");
        }
    }

    // Nothing was created by the rejected requests
    let tasks = app
        .server
        .get("/tasks")
        .add_header("X-API-Key", super::super::helpers::API_KEY)
        .await
        .json::<Vec<Value>>();
    assert!(tasks.is_empty());
}
