// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::Extension;
use contactrs::config::settings::Settings;
use contactrs::domain::services::scrape_service::ScrapeService;
use contactrs::domain::services::validation_service::{DnsMxResolver, ValidationService};
use contactrs::engines::fetch_engine::BrowserEngine;
use contactrs::engines::traits::FetchEngine;
use contactrs::presentation::routes;
use contactrs::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting contactrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Initialize components
    let engine: Arc<dyn FetchEngine> = Arc::new(BrowserEngine);
    let resolver = Arc::new(DnsMxResolver::from_settings(&settings.dns));
    let validator = Arc::new(ValidationService::new(
        resolver,
        settings.dns.max_concurrency,
    ));
    let service = Arc::new(ScrapeService::new(
        engine,
        validator,
        settings.fetcher.clone(),
    ));
    info!("Scrape pipeline initialized");

    // 4. Start HTTP server
    let app = routes::routes()
        .layer(Extension(service))
        .layer(Extension(settings.clone()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
