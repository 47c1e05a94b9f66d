// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 社交链接集合
///
/// 按平台分类存放页面上发现的社交主页链接，
/// 每个分类内部按完全匹配去重
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub facebook: Vec<String>,
    pub twitter: Vec<String>,
    pub linkedin: Vec<String>,
    pub instagram: Vec<String>,
    pub youtube: Vec<String>,
    pub tiktok: Vec<String>,
}

impl SocialLinks {
    /// 向指定平台分类插入链接，重复链接被忽略
    pub fn insert(&mut self, platform: &str, url: &str) {
        if let Some(bucket) = self.bucket_mut(platform) {
            if !bucket.iter().any(|existing| existing == url) {
                bucket.push(url.to_string());
            }
        }
    }

    /// 将另一个集合按分类并入当前集合
    pub fn merge(&mut self, other: SocialLinks) {
        for (platform, urls) in [
            ("facebook", other.facebook),
            ("twitter", other.twitter),
            ("linkedin", other.linkedin),
            ("instagram", other.instagram),
            ("youtube", other.youtube),
            ("tiktok", other.tiktok),
        ] {
            for url in urls {
                self.insert(platform, &url);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.facebook.is_empty()
            && self.twitter.is_empty()
            && self.linkedin.is_empty()
            && self.instagram.is_empty()
            && self.youtube.is_empty()
            && self.tiktok.is_empty()
    }

    fn bucket_mut(&mut self, platform: &str) -> Option<&mut Vec<String>> {
        match platform {
            "facebook" => Some(&mut self.facebook),
            "twitter" => Some(&mut self.twitter),
            "linkedin" => Some(&mut self.linkedin),
            "instagram" => Some(&mut self.instagram),
            "youtube" => Some(&mut self.youtube),
            "tiktok" => Some(&mut self.tiktok),
            _ => None,
        }
    }
}
