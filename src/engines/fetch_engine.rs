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

use crate::engines::traits::{FetchEngine, FetchError, FetchRequest, FetchResponse};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::time::Instant;

/// 浏览器身份的固定请求头
///
/// 用于降低被简单反爬过滤器拦截的概率
const BROWSER_HEADERS: &[(&str, &str)] = &[
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
    ),
    ("Accept-Language", "en-US,en;q=0.9"),
    ("Referer", "https://www.google.com/"),
    ("Upgrade-Insecure-Requests", "1"),
    ("Sec-Fetch-Dest", "document"),
    ("Sec-Fetch-Mode", "navigate"),
    ("Sec-Fetch-Site", "none"),
    ("Sec-Fetch-User", "?1"),
];

const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// 抓取引擎
///
/// 基于reqwest实现的携带浏览器身份的HTTP抓取引擎
pub struct BrowserEngine;

impl BrowserEngine {
    fn build_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (k, v) in BROWSER_HEADERS {
            if let (Ok(k), Ok(v)) = (
                HeaderName::from_bytes(k.as_bytes()),
                HeaderValue::from_str(v),
            ) {
                headers.insert(k, v);
            }
        }
        headers
    }
}

#[async_trait]
impl FetchEngine for BrowserEngine {
    /// 执行HTTP抓取
    ///
    /// # 参数
    ///
    /// * `request` - 抓取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchResponse)` - 抓取响应
    /// * `Err(FetchError)` - 抓取过程中出现的错误
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, FetchError> {
        // Each request gets a fresh client for cookie isolation
        let mut builder = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(Self::build_headers())
            .timeout(request.timeout)
            .cookie_store(true);

        // Handle proxy
        if let Some(proxy_url) = &request.proxy {
            let proxy = reqwest::Proxy::all(proxy_url)
                .map_err(|e| FetchError::Other(format!("Invalid proxy: {}", e)))?;
            builder = builder.proxy(proxy);
        }

        // Relaxed certificate validation is scoped to this one client
        if request.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder.build()?;

        let start = Instant::now();
        let response = client.get(&request.url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(request.timeout.as_secs())
            } else {
                FetchError::RequestFailed(e)
            }
        })?;

        // Non-2xx statuses (blocked, not found, upstream errors) are fetch failures
        let response = response.error_for_status()?;
        let status_code = response.status().as_u16();

        let content = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(request.timeout.as_secs())
            } else {
                FetchError::RequestFailed(e)
            }
        })?;

        Ok(FetchResponse {
            status_code,
            content,
            response_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "browser"
    }
}
