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

use serde::{Deserialize, Serialize};

/// 抓取请求数据传输对象
///
/// url字段缺失属于使用错误，由处理器转换为结构化失败响应
/// 而不是让反序列化拒绝请求
#[derive(Debug, Deserialize, Serialize)]
pub struct ScrapeRequestDto {
    /// 要抓取的目标URL
    #[serde(default)]
    pub url: Option<String>,
}
