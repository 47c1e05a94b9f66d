// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::social_links::SocialLinks;
use serde::{Deserialize, Serialize};

/// 抓取报告实体
///
/// 单次抓取请求的终态结果，组装完成后不再变更。
/// 候选邮箱数量包含未通过MX验证的候选，
/// 邮箱列表只包含验证通过的地址。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeReport {
    /// 规范化后的目标URL
    pub url: String,
    /// 页面上发现的候选邮箱数量（去重后）
    pub candidates_found: usize,
    /// 通过MX验证的邮箱列表
    pub valid_emails: Vec<String>,
    /// 按平台分类的社交链接
    pub social_links: SocialLinks,
}
