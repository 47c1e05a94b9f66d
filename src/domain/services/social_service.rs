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

use crate::domain::models::social_links::SocialLinks;
use crate::domain::services::extraction_service::PageLink;

/// 平台分类表，按表内顺序匹配，首个命中的平台生效
const PLATFORM_DOMAINS: &[(&str, &[&str])] = &[
    ("facebook", &["facebook.com"]),
    ("twitter", &["twitter.com", "x.com"]),
    ("linkedin", &["linkedin.com"]),
    ("instagram", &["instagram.com"]),
    ("youtube", &["youtube.com"]),
    ("tiktok", &["tiktok.com"]),
];

/// 社交链接分类服务
///
/// 将出站链接按已知社交平台归类，分享组件链接在归类前被排除
pub struct SocialService;

impl SocialService {
    /// 分类链接列表
    ///
    /// # 参数
    ///
    /// * `links` - 页面出站链接列表
    ///
    /// # 返回值
    ///
    /// 按平台分类、逐类去重的社交链接集合
    pub fn classify(links: &[PageLink]) -> SocialLinks {
        let mut social = SocialLinks::default();

        for link in links {
            let href = link.href.trim();
            if href.is_empty() {
                continue;
            }

            let lowered = href.to_lowercase();

            // Sharing widgets, not the site's own profiles
            if lowered.contains("share") || lowered.contains("intent/tweet") {
                continue;
            }

            for (platform, domains) in PLATFORM_DOMAINS {
                if domains.iter().any(|domain| lowered.contains(domain)) {
                    social.insert(platform, href);
                    break;
                }
            }
        }

        social
    }
}
