// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_scrape_happy_path() {
    let site = MockServer::start().await;
    let html = r#"
        <html><body>
            <a href="mailto:sales@acme.test?subject=hi">Email us</a>
            <p>Questions? Write to SALES@ACME.TEST</p>
            <a href="https://facebook.com/acme">Facebook</a>
            <a href="https://x.com/acme">X</a>
        </body></html>
    "#;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&site)
        .await;

    let app = create_test_app(&["acme.test"]);

    let response = app
        .post("/v1/scrape")
        .json(&serde_json::json!({ "url": site.uri() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["url"], site.uri());
    assert_eq!(body["candidates_found"], 1);
    assert_eq!(body["valid_emails_count"], 1);
    assert_eq!(body["emails"][0], "sales@acme.test");
    assert_eq!(body["social_media"]["facebook"][0], "https://facebook.com/acme");
    assert_eq!(body["social_media"]["twitter"][0], "https://x.com/acme");
}

#[tokio::test]
async fn test_scrape_deep_crawl_fetches_contact_page_once() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body><a href="/contact-us">Contact</a></body></html>"#,
        ))
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/contact-us"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>Reach us at support@acme.test</body></html>"#,
        ))
        .expect(1)
        .mount(&site)
        .await;

    let app = create_test_app(&["acme.test"]);

    let response = app
        .post("/v1/scrape")
        .json(&serde_json::json!({ "url": site.uri() }))
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["candidates_found"], 1);
    assert_eq!(body["emails"][0], "support@acme.test");
}

#[tokio::test]
async fn test_scrape_no_deep_crawl_when_home_page_has_candidates() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
                sales@acme.test
                <a href="/contact-us">Contact</a>
            </body></html>"#,
        ))
        .mount(&site)
        .await;
    // The contact page must never be requested
    Mock::given(method("GET"))
        .and(path("/contact-us"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&site)
        .await;

    let app = create_test_app(&["acme.test"]);

    let response = app
        .post("/v1/scrape")
        .json(&serde_json::json!({ "url": site.uri() }))
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["candidates_found"], 1);
}

#[tokio::test]
async fn test_scrape_validation_excludes_unverified_domains() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>a@real.test b@fake.test</body></html>"#,
        ))
        .mount(&site)
        .await;

    let app = create_test_app(&["real.test"]);

    let response = app
        .post("/v1/scrape")
        .json(&serde_json::json!({ "url": site.uri() }))
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["candidates_found"], 2);
    assert_eq!(body["valid_emails_count"], 1);
    assert_eq!(body["emails"], serde_json::json!(["a@real.test"]));
}

#[tokio::test]
async fn test_scrape_missing_url_is_structured_failure() {
    let app = create_test_app(&[]);

    let response = app.post("/v1/scrape").json(&serde_json::json!({})).await;

    // The caller treats any non-success transport status as a broken
    // pipeline, so even usage errors ride on HTTP 200
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing url");
    assert_eq!(body["emails"], serde_json::json!([]));
    assert_eq!(body["social_media"], serde_json::json!({}));
}

#[tokio::test]
async fn test_scrape_unreachable_upstream_is_structured_failure() {
    let app = create_test_app(&[]);

    let response = app
        .post("/v1/scrape")
        .json(&serde_json::json!({ "url": "http://127.0.0.1:1" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert_eq!(body["url"], "http://127.0.0.1:1");
    assert!(body["error"].as_str().unwrap().len() > 0);
    assert_eq!(body["emails"], serde_json::json!([]));
    assert_eq!(body["social_media"], serde_json::json!({}));
}

#[tokio::test]
async fn test_scrape_blocked_status_is_structured_failure() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&site)
        .await;

    let app = create_test_app(&[]);

    let response = app
        .post("/v1/scrape")
        .json(&serde_json::json!({ "url": site.uri() }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("403"));
}
