// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, API_KEY};
use axum::http::StatusCode;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_html(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "text/html"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_scrape_end_to_end() {
    let site = MockServer::start().await;
    let other_host = site.uri().replace("127.0.0.1", "localhost");

    mount_html(
        &site,
        "/",
        &format!(
            r#"<html><body>
                <h1>Home</h1>
                <img src="/logo.png">
                <a href="/about">About</a>
                <a href="/broken">Broken</a>
                <a href="{}/elsewhere">Elsewhere</a>
            </body></html>"#,
            other_host
        ),
    )
    .await;
    mount_html(&site, "/about", "<p>About us</p>").await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/logo.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"\x89PNG-bytes".to_vec(), "image/png"))
        .mount(&site)
        .await;

    let app = create_test_app().await;
    let response = app
        .server
        .post("/scrape")
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "url": format!("{}/", site.uri()), "max_pages": 10 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    let pages = body["pages"].as_array().unwrap();

    assert_eq!(body["pages_fetched"], 2);
    assert_eq!(pages.len(), 3);
    assert_eq!(pages[0]["url"], format!("{}/", site.uri()));
    assert_eq!(pages[1]["url"], format!("{}/about", site.uri()));
    assert!(pages[2]["error"].as_str().unwrap().contains("500"));

    // Text of the seed page is served back
    let text_name = pages[0]["saved_text_filename"].as_str().unwrap();
    let file = app
        .server
        .get(&format!("/files/{}", text_name))
        .add_header("X-API-Key", API_KEY)
        .await;
    assert_eq!(file.status_code(), StatusCode::OK);
    assert_eq!(
        file.header("content-type").to_str().unwrap(),
        "text/plain; charset=utf-8"
    );
    assert!(file.text().contains("Home"));

    // And so is the image
    let images = pages[0]["saved_image_filenames"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    let image = app
        .server
        .get(&format!("/files/{}", images[0].as_str().unwrap()))
        .add_header("X-API-Key", API_KEY)
        .await;
    assert_eq!(image.status_code(), StatusCode::OK);
    assert_eq!(image.header("content-type").to_str().unwrap(), "image/png");
    assert_eq!(image.as_bytes().as_ref(), b"\x89PNG-bytes");

    // The other host was never requested
    let requests = site.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.url.path() != "/elsewhere"));
}

#[tokio::test]
async fn test_scrape_max_pages_one_fetches_only_seed() {
    let site = MockServer::start().await;
    mount_html(&site, "/", r#"<a href="/next">next</a>"#).await;
    Mock::given(method("GET"))
        .and(path("/next"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&site)
        .await;

    let app = create_test_app().await;
    let response = app
        .server
        .post("/scrape")
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "url": site.uri(), "max_pages": 1 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["pages"].as_array().unwrap().len(), 1);
    assert_eq!(body["pages_fetched"], 1);
}

#[tokio::test]
async fn test_scrape_seed_failure_is_bad_gateway() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&site)
        .await;

    let app = create_test_app().await;
    let response = app
        .server
        .post("/scrape")
        .add_header("X-API-Key", API_KEY)
        .json(&json!({ "url": site.uri() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    assert_eq!(response.json::<Value>()["error"]["code"], "fetch_failed");
}

#[tokio::test]
async fn test_scrape_request_validation() {
    let app = create_test_app().await;

    for payload in [
        json!({ "url": "https://example.com", "max_pages": 0 }),
        json!({ "url": "https://example.com", "max_pages": 101 }),
        json!({ "url": "ftp://example.com/file" }),
        json!({ "url": "not a url" }),
        json!({ "max_pages": 3 }),
    ] {
        let response = app
            .server
            .post("/scrape")
            .add_header("X-API-Key", API_KEY)
            .json(&payload)
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}", payload);
        assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    }
}
