// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::create_test_app;
use axum::http::StatusCode;

#[tokio::test]
async fn test_root_liveness_message() {
    let app = create_test_app(&[]);

    let response = app.get("/").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "Scraper is running!");
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app(&[]);

    let response = app.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_version() {
    let app = create_test_app(&[]);

    let response = app.get("/v1/version").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}
