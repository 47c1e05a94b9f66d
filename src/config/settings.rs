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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、抓取器和DNS验证等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 抓取器配置
    pub fetcher: FetcherSettings,
    /// DNS验证配置
    pub dns: DnsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 抓取器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherSettings {
    /// 单次页面请求的超时时间（秒）
    pub timeout_secs: u64,
    /// 上游HTTP(S)代理URL（可选）
    pub proxy: Option<String>,
    /// 是否接受无效或自签名证书
    pub accept_invalid_certs: bool,
}

/// DNS验证配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DnsSettings {
    /// 单次MX查询的超时时间（秒）
    pub timeout_secs: u64,
    /// 并发MX查询的上限
    pub max_concurrency: usize,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default fetcher settings
            .set_default("fetcher.timeout_secs", 20)?
            .set_default("fetcher.accept_invalid_certs", true)?
            // Default DNS settings
            .set_default("dns.timeout_secs", 5)?
            .set_default("dns.max_concurrency", 16)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("CONTACTRS").separator("__"));

        builder.build()?.try_deserialize()
    }
}
