// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::FetchError;
use thiserror::Error;

/// 抓取流水线错误类型
///
/// 只有输入错误和主页抓取错误会终止整个请求，
/// 其余失败在流水线内部降级处理
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Missing url")]
    MissingUrl,

    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("{0}")]
    Fetch(#[from] FetchError),
}
