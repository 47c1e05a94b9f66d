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

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 超时
    #[error("Request timeout after {0} seconds")]
    Timeout(u64),
    /// 其他错误
    #[error("Other error: {0}")]
    Other(String),
}

/// 页面抓取请求
pub struct FetchRequest {
    /// 目标URL
    pub url: String,
    /// 超时时间
    pub timeout: Duration,
    /// 代理配置 (URL)
    pub proxy: Option<String>,
    /// 是否接受无效或自签名证书
    pub accept_invalid_certs: bool,
}

/// 页面抓取响应
pub struct FetchResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应内容
    pub content: String,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

/// 页面抓取引擎特质
#[async_trait]
pub trait FetchEngine: Send + Sync {
    /// 执行单次页面抓取
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, FetchError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
