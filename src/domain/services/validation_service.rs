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

use crate::config::settings::DnsSettings;
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// MX解析器特质
///
/// 验证服务通过该接口询问某个域名是否存在邮件交换记录
#[async_trait]
pub trait MxResolver: Send + Sync {
    /// 查询域名是否至少有一条MX记录
    async fn has_mx_records(&self, domain: &str) -> bool;
}

/// 基于hickory-resolver的生产MX解析器
pub struct DnsMxResolver {
    resolver: TokioAsyncResolver,
}

impl DnsMxResolver {
    /// 创建新的解析器实例
    ///
    /// 优先使用运行环境的系统DNS配置，读取失败时退回
    /// 默认公共配置并应用配置的查询超时
    pub fn from_settings(settings: &DnsSettings) -> Self {
        let resolver = match TokioAsyncResolver::tokio_from_system_conf() {
            Ok(resolver) => resolver,
            Err(e) => {
                warn!("Failed to read system DNS configuration, using defaults: {}", e);
                let mut opts = ResolverOpts::default();
                opts.timeout = Duration::from_secs(settings.timeout_secs);
                TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
            }
        };

        Self { resolver }
    }
}

#[async_trait]
impl MxResolver for DnsMxResolver {
    async fn has_mx_records(&self, domain: &str) -> bool {
        match self.resolver.mx_lookup(domain).await {
            Ok(lookup) => lookup.iter().next().is_some(),
            Err(e) => {
                debug!("MX lookup failed for {}: {}", domain, e);
                false
            }
        }
    }
}

/// 验证服务
///
/// 对候选邮箱执行独立的MX记录检查。单个候选的任何查询失败
/// 都只意味着该候选无效，永远不会作为错误向上传播
pub struct ValidationService {
    resolver: Arc<dyn MxResolver>,
    max_concurrency: usize,
}

impl ValidationService {
    /// 创建新的验证服务实例
    ///
    /// # 参数
    ///
    /// * `resolver` - MX解析器实例
    /// * `max_concurrency` - 并发查询上限
    pub fn new(resolver: Arc<dyn MxResolver>, max_concurrency: usize) -> Self {
        Self {
            resolver,
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// 验证单个候选邮箱
    ///
    /// 域名取最后一个`@`之后的部分，没有`@`分隔域名的候选
    /// 直接判定无效
    pub async fn validate_email(&self, email: &str) -> bool {
        let Some((_, domain)) = email.rsplit_once('@') else {
            return false;
        };
        if domain.is_empty() {
            return false;
        }

        self.resolver.has_mx_records(domain).await
    }

    /// 并发验证候选集
    ///
    /// 所有候选同时派发，单个候选的失败不影响其他候选；
    /// 全部查询结束后才返回（完成屏障）
    ///
    /// # 返回值
    ///
    /// 按候选集原有顺序排列的验证通过邮箱列表
    pub async fn validate_batch(&self, candidates: &[String]) -> Vec<String> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let outcomes: Vec<(String, bool)> = stream::iter(candidates.to_vec())
            .map(|email| async move {
                let valid = self.validate_email(&email).await;
                (email, valid)
            })
            .buffer_unordered(self.max_concurrency)
            .collect()
            .await;

        let valid: HashSet<String> = outcomes
            .into_iter()
            .filter(|(_, ok)| *ok)
            .map(|(email, _)| email)
            .collect();

        candidates
            .iter()
            .filter(|email| valid.contains(*email))
            .cloned()
            .collect()
    }
}
