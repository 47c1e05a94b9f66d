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

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use tracing::warn;

use crate::{
    application::dto::{scrape_request::ScrapeRequestDto, scrape_response::ScrapeResponseDto},
    domain::services::scrape_service::ScrapeService,
};

/// 抓取端点处理器
///
/// 调用方把任何非成功传输状态视为流水线故障，所以每种流水线
/// 结果（成功或失败）都以HTTP 200加success标志返回
pub async fn create_scrape(
    Extension(service): Extension<Arc<ScrapeService>>,
    Json(payload): Json<ScrapeRequestDto>,
) -> impl IntoResponse {
    let url = match payload.url {
        Some(url) if !url.trim().is_empty() => url,
        _ => {
            return (
                StatusCode::OK,
                Json(ScrapeResponseDto::failure(None, "Missing url".to_string())),
            );
        }
    };

    match service.scrape(&url).await {
        Ok(report) => (StatusCode::OK, Json(ScrapeResponseDto::from_report(&report))),
        Err(e) => {
            warn!("Scrape failed for {}: {}", url, e);
            (
                StatusCode::OK,
                Json(ScrapeResponseDto::failure(Some(url), e.to_string())),
            )
        }
    }
}
