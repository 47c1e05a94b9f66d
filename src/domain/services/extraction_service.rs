use scraper::{Html, Selector};

/// 页面链接
///
/// 锚标签的目标地址与可见文本
#[derive(Debug, Clone)]
pub struct PageLink {
    pub href: String,
    pub text: String,
}

/// 页面内容的三个派生视图
#[derive(Debug, Default)]
pub struct PageExtract {
    /// 页面可见文本
    pub text: String,
    /// 去掉mailto前缀和查询参数后的邮箱地址
    pub mailto_addresses: Vec<String>,
    /// 出站链接列表
    pub links: Vec<PageLink>,
}

/// 提取服务
///
/// 负责从 HTML 内容中派生可见文本、mailto地址和链接列表
pub struct ExtractionService;

impl ExtractionService {
    /// 提取页面内容
    ///
    /// 可见文本取自body（无body时退回整个文档），联系邮箱
    /// 经常出现在普通文字里而不只是mailto链接中
    pub fn extract(html_content: &str) -> PageExtract {
        let document = Html::parse_document(html_content);

        let text = match Selector::parse("body") {
            Ok(body_selector) => {
                let mut parts: Vec<&str> = Vec::new();
                for body in document.select(&body_selector) {
                    parts.extend(body.text());
                }
                if parts.is_empty() {
                    document.root_element().text().collect::<Vec<_>>()
                } else {
                    parts
                }
                .join(" ")
            }
            Err(_) => document.root_element().text().collect::<Vec<_>>().join(" "),
        };

        let mut mailto_addresses = Vec::new();
        let mut links = Vec::new();

        if let Ok(anchor_selector) = Selector::parse("a[href]") {
            for element in document.select(&anchor_selector) {
                let Some(href) = element.value().attr("href") else {
                    continue;
                };
                let anchor_text = element.text().collect::<Vec<_>>().join(" ").trim().to_string();

                if let Some(address) = Self::strip_mailto(href) {
                    mailto_addresses.push(address);
                }

                links.push(PageLink {
                    href: href.to_string(),
                    text: anchor_text,
                });
            }
        }

        PageExtract {
            text,
            mailto_addresses,
            links,
        }
    }

    /// 去除mailto前缀和查询参数，空结果被丢弃
    fn strip_mailto(href: &str) -> Option<String> {
        let trimmed = href.trim();
        let prefix = trimmed.get(..7)?;
        if !prefix.eq_ignore_ascii_case("mailto:") {
            return None;
        }

        let address = trimmed[7..].split('?').next().unwrap_or("").trim();
        if address.is_empty() {
            None
        } else {
            Some(address.to_string())
        }
    }
}
