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
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含服务器、数据库、认证、存储和抓取器等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 认证配置
    pub auth: AuthSettings,
    /// 存储配置
    pub storage: StorageSettings,
    /// 抓取器配置
    pub scraper: ScraperSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 数据库配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 认证配置设置
#[derive(Clone, Deserialize)]
pub struct AuthSettings {
    /// 请求头 `X-API-Key` 必须匹配的密钥
    pub api_key: String,
}

// Keep the key out of debug output and logs.
impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 抓取内容的本地存储目录
    pub local_path: String,
}

/// 抓取器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ScraperSettings {
    /// 单次HTTP请求超时时间（秒）
    pub request_timeout_secs: u64,
    /// 请求未指定 `max_pages` 时的默认值
    pub default_max_pages: usize,
    /// `max_pages` 的上限
    pub max_pages_limit: usize,
    /// 同时运行的抓取任务上限
    pub max_concurrent_jobs: usize,
    /// 抓取时使用的 User-Agent
    pub user_agent: String,
}

impl ScraperSettings {
    /// 单次请求超时时间
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `TASKSCRAPE__` 前缀的环境变量，后者覆盖前者
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败或校验失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("TASKSCRAPE").separator("__"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn defaults() -> Result<config::builder::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            // Default DB pool settings
            .set_default("database.url", "sqlite://taskscrape.db?mode=rwc")?
            .set_default("database.max_connections", 10)?
            .set_default("database.min_connections", 1)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            .set_default("auth.api_key", "")?
            .set_default("storage.local_path", "./scraped_files")?
            // Default scraper settings
            .set_default("scraper.request_timeout_secs", 10)?
            .set_default("scraper.default_max_pages", 10)?
            .set_default("scraper.max_pages_limit", 100)?
            .set_default("scraper.max_concurrent_jobs", 4)?
            .set_default(
                "scraper.user_agent",
                concat!("taskscrape/", env!("CARGO_PKG_VERSION")),
            )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "auth.api_key must be set (TASKSCRAPE__AUTH__API_KEY)".to_string(),
            ));
        }
        if self.scraper.max_pages_limit == 0 || self.scraper.default_max_pages == 0 {
            return Err(ConfigError::Message(
                "scraper page limits must be greater than zero".to_string(),
            ));
        }
        if self.scraper.default_max_pages > self.scraper.max_pages_limit {
            return Err(ConfigError::Message(
                "scraper.default_max_pages exceeds scraper.max_pages_limit".to_string(),
            ));
        }
        if self.scraper.max_concurrent_jobs == 0 {
            return Err(ConfigError::Message(
                "scraper.max_concurrent_jobs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
