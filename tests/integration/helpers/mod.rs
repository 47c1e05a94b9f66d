// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use axum::Extension;
use axum_test::TestServer;
use contactrs::config::settings::FetcherSettings;
use contactrs::domain::services::scrape_service::ScrapeService;
use contactrs::domain::services::validation_service::{MxResolver, ValidationService};
use contactrs::engines::fetch_engine::BrowserEngine;
use contactrs::engines::traits::FetchEngine;
use contactrs::presentation::routes;
use std::sync::Arc;

/// 按白名单应答的MX解析器，让验证结果在测试中可预测
pub struct ListMxResolver {
    valid_domains: Vec<String>,
}

#[async_trait]
impl MxResolver for ListMxResolver {
    async fn has_mx_records(&self, domain: &str) -> bool {
        self.valid_domains.iter().any(|d| d == domain)
    }
}

/// 构建带真实抓取引擎和桩MX解析器的测试应用
pub fn create_test_app(valid_domains: &[&str]) -> TestServer {
    let engine: Arc<dyn FetchEngine> = Arc::new(BrowserEngine);
    let resolver = Arc::new(ListMxResolver {
        valid_domains: valid_domains.iter().map(|d| d.to_string()).collect(),
    });
    let validator = Arc::new(ValidationService::new(resolver, 8));
    let service = Arc::new(ScrapeService::new(
        engine,
        validator,
        FetcherSettings {
            timeout_secs: 5,
            proxy: None,
            accept_invalid_certs: true,
        },
    ));

    let app = routes::routes().layer(Extension(service));
    TestServer::new(app).expect("test server must start")
}
