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

use crate::config::settings::FetcherSettings;
use crate::domain::models::scrape_report::ScrapeReport;
use crate::domain::services::contact_page_selector::ContactPageSelector;
use crate::domain::services::email_service::EmailMiner;
use crate::domain::services::extraction_service::{ExtractionService, PageExtract};
use crate::domain::services::social_service::SocialService;
use crate::domain::services::validation_service::ValidationService;
use crate::engines::traits::{FetchEngine, FetchRequest, FetchResponse};
use crate::utils::errors::ScrapeError;
use crate::utils::url_utils;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

/// 抓取服务
///
/// 编排 抓取 → 提取 → 挖掘/分类 → (条件)联系页 → 合并 → 验证
/// 的完整流水线，并承担全部失败隔离策略：
/// 只有输入错误和主页抓取失败会终止请求，
/// 联系页失败和单个候选的验证失败都就地吸收
pub struct ScrapeService {
    /// 页面抓取引擎
    engine: Arc<dyn FetchEngine>,
    /// 验证服务
    validator: Arc<ValidationService>,
    /// 抓取器配置
    fetcher: FetcherSettings,
}

impl ScrapeService {
    /// 创建新的抓取服务实例
    ///
    /// # 参数
    ///
    /// * `engine` - 页面抓取引擎
    /// * `validator` - MX验证服务
    /// * `fetcher` - 抓取器配置
    pub fn new(
        engine: Arc<dyn FetchEngine>,
        validator: Arc<ValidationService>,
        fetcher: FetcherSettings,
    ) -> Self {
        Self {
            engine,
            validator,
            fetcher,
        }
    }

    /// 执行一次完整抓取
    ///
    /// # 参数
    ///
    /// * `raw_url` - 请求中的目标URL，裸域名会被补全为https
    ///
    /// # 返回值
    ///
    /// * `Ok(ScrapeReport)` - 组装完成的终态结果
    /// * `Err(ScrapeError)` - 输入错误或主页抓取失败
    pub async fn scrape(&self, raw_url: &str) -> Result<ScrapeReport, ScrapeError> {
        let target = url_utils::coerce_scheme(raw_url);
        if target == "https://" {
            return Err(ScrapeError::MissingUrl);
        }
        let base =
            Url::parse(&target).map_err(|e| ScrapeError::InvalidUrl(format!("{}: {}", target, e)))?;

        info!("Starting scrape for: {}", target);

        let home = self.fetch_page(&target).await?;
        debug!(
            "Fetched home page, status {} in {}ms",
            home.status_code, home.response_time_ms
        );

        let extract = ExtractionService::extract(&home.content);
        let mut candidates = EmailMiner::mine(&Self::combined_text(&extract));
        let mut socials = SocialService::classify(&extract.links);

        // Depth-limited fallback: at most one secondary page, only when the
        // home page yielded zero candidates
        if candidates.is_empty() {
            if let Some(contact_url) = ContactPageSelector::select(&extract.links, &base) {
                info!("No candidates on home page, trying contact page: {}", contact_url);
                match self.fetch_page(contact_url.as_str()).await {
                    Ok(page) => {
                        let contact_extract = ExtractionService::extract(&page.content);
                        for email in EmailMiner::mine(&Self::combined_text(&contact_extract)) {
                            if !candidates.contains(&email) {
                                candidates.push(email);
                            }
                        }
                        socials.merge(SocialService::classify(&contact_extract.links));
                    }
                    Err(e) => {
                        // Secondary-page failures never abort the request
                        warn!("Contact page fetch failed, continuing without it: {}", e);
                    }
                }
            }
        }

        info!("Found {} candidates, validating MX records...", candidates.len());
        let valid_emails = self.validator.validate_batch(&candidates).await;
        info!("Validation complete: {}/{} valid", valid_emails.len(), candidates.len());

        Ok(ScrapeReport {
            url: target,
            candidates_found: candidates.len(),
            valid_emails,
            social_links: socials,
        })
    }

    async fn fetch_page(&self, url: &str) -> Result<FetchResponse, crate::engines::traits::FetchError> {
        let request = FetchRequest {
            url: url.to_string(),
            timeout: Duration::from_secs(self.fetcher.timeout_secs),
            proxy: self.fetcher.proxy.clone(),
            accept_invalid_certs: self.fetcher.accept_invalid_certs,
        };

        self.engine.fetch(&request).await
    }

    /// 可见文本与mailto地址空格拼接，作为挖掘输入
    fn combined_text(extract: &PageExtract) -> String {
        format!("{} {}", extract.text, extract.mailto_addresses.join(" "))
    }
}
