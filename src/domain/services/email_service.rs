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

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// 邮箱形状匹配模式
///
/// local-part 和域名标签允许字母、数字、点、下划线和连字符，
/// 顶级域至少两个字母
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// 以这些扩展名结尾的候选是嵌在文本或URL里的资源文件名，
/// 不是邮箱地址（如 logo@2x.png 这类命名）
const ASSET_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".js", ".css", ".svg", ".gif", ".webp", ".woff", ".mp4",
];

/// 邮箱挖掘服务
///
/// 从合并文本中扫描邮箱形状的词元，归一化、去重并过滤噪声。
/// 该阶段是纯函数：相同输入总是产出相同候选集
pub struct EmailMiner;

impl EmailMiner {
    /// 挖掘候选邮箱
    ///
    /// # 参数
    ///
    /// * `content` - 可见文本与mailto地址拼接后的文本
    ///
    /// # 返回值
    ///
    /// 小写归一化、按首次出现顺序去重后的候选列表
    pub fn mine(content: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for matched in EMAIL_RE.find_iter(content) {
            let email = matched.as_str().to_lowercase();

            if ASSET_EXTENSIONS.iter().any(|ext| email.ends_with(ext)) {
                continue;
            }

            if seen.insert(email.clone()) {
                candidates.push(email);
            }
        }

        candidates
    }
}
