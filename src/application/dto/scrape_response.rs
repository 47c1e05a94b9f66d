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

use crate::domain::models::scrape_report::ScrapeReport;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// 抓取响应数据传输对象
///
/// 成功时携带候选数量、验证通过的邮箱和社交链接；
/// 失败时携带原因字符串，emails为空数组，social_media为空对象
#[derive(Debug, Deserialize, Serialize)]
pub struct ScrapeResponseDto {
    /// 流水线是否成功
    pub success: bool,
    /// 规范化后的目标URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 去重后的候选邮箱数量
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates_found: Option<usize>,
    /// 验证通过的邮箱数量
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_emails_count: Option<usize>,
    /// 验证通过的邮箱列表
    pub emails: Vec<String>,
    /// 按平台分类的社交链接
    pub social_media: Value,
    /// 失败原因
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapeResponseDto {
    /// 从抓取报告构建成功响应
    pub fn from_report(report: &ScrapeReport) -> Self {
        Self {
            success: true,
            url: Some(report.url.clone()),
            candidates_found: Some(report.candidates_found),
            valid_emails_count: Some(report.valid_emails.len()),
            emails: report.valid_emails.clone(),
            social_media: serde_json::to_value(&report.social_links).unwrap_or_else(|_| json!({})),
            error: None,
        }
    }

    /// 构建失败响应
    pub fn failure(url: Option<String>, error: String) -> Self {
        Self {
            success: false,
            url,
            candidates_found: None,
            valid_emails_count: None,
            emails: Vec::new(),
            social_media: json!({}),
            error: Some(error),
        }
    }
}
