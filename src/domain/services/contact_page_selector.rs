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

use crate::domain::services::extraction_service::PageLink;
use crate::utils::url_utils;
use url::Url;

/// 联系页选择器
///
/// 仅在主页未发现任何候选邮箱时使用，按文档顺序扫描锚标签，
/// 命中首个符合条件的锚后停止扫描（首次命中策略，不做排序）
pub struct ContactPageSelector;

impl ContactPageSelector {
    /// 选择至多一个二级抓取页面
    ///
    /// # 参数
    ///
    /// * `links` - 按文档顺序排列的页面链接
    /// * `base` - 用于解析相对地址的基准URL
    ///
    /// # 返回值
    ///
    /// 解析为绝对地址的联系页URL，无合格锚时返回None
    pub fn select(links: &[PageLink], base: &Url) -> Option<Url> {
        for link in links {
            let text = link.text.to_lowercase();
            let href = link.href.to_lowercase();

            if text.contains("contact") || text.contains("about") || href.contains("contact") {
                // First match wins, even if the href fails to resolve
                return url_utils::resolve_url(base, &link.href).ok();
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(href: &str, text: &str) -> PageLink {
        PageLink {
            href: href.to_string(),
            text: text.to_string(),
        }
    }

    fn base() -> Url {
        Url::parse("https://acme.test/").unwrap()
    }

    #[test]
    fn test_select_by_anchor_text() {
        let links = vec![
            link("/pricing", "Pricing"),
            link("/reach-us", "Contact us"),
            link("/contact", "Other"),
        ];

        let selected = ContactPageSelector::select(&links, &base()).unwrap();

        assert_eq!(selected.as_str(), "https://acme.test/reach-us");
    }

    #[test]
    fn test_select_by_about_text() {
        let links = vec![link("/team", "About the company")];

        let selected = ContactPageSelector::select(&links, &base()).unwrap();

        assert_eq!(selected.as_str(), "https://acme.test/team");
    }

    #[test]
    fn test_select_by_href_substring() {
        let links = vec![link("/contact-us", "Get in touch")];

        let selected = ContactPageSelector::select(&links, &base()).unwrap();

        assert_eq!(selected.as_str(), "https://acme.test/contact-us");
    }

    #[test]
    fn test_select_is_case_insensitive() {
        let links = vec![link("/reach", "CONTACT US")];

        assert!(ContactPageSelector::select(&links, &base()).is_some());
    }

    #[test]
    fn test_select_first_match_in_document_order() {
        let links = vec![
            link("/about", "About"),
            link("/contact", "Contact"),
        ];

        let selected = ContactPageSelector::select(&links, &base()).unwrap();

        assert_eq!(selected.as_str(), "https://acme.test/about");
    }

    #[test]
    fn test_select_resolves_absolute_href() {
        let links = vec![link("https://other.test/contact", "Contact")];

        let selected = ContactPageSelector::select(&links, &base()).unwrap();

        assert_eq!(selected.as_str(), "https://other.test/contact");
    }

    #[test]
    fn test_select_none_when_no_anchor_qualifies() {
        let links = vec![link("/pricing", "Pricing"), link("/blog", "Blog")];

        assert!(ContactPageSelector::select(&links, &base()).is_none());
    }
}
