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

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;
use thiserror::Error;

/// 抓取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// URL无效
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// 超时
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// 网络或协议错误（DNS、连接、重定向过多等）
    #[error("Request failed: {0}")]
    Request(String),
    /// 非2xx状态码
    #[error("HTTP {status} returned by {url}")]
    Status { status: u16, url: String },
    /// 响应体读取失败
    #[error("Failed to read response body: {0}")]
    Body(String),
}

/// 一次成功抓取的内容
#[derive(Debug, Clone)]
pub struct FetchedContent {
    /// 响应体
    pub bytes: Bytes,
    /// 内容类型，响应未提供时为空字符串
    pub content_type: String,
    /// 跟随重定向后的最终URL
    pub final_url: String,
}

impl FetchedContent {
    /// 是否为HTML文档，未声明内容类型时按HTML处理
    pub fn is_html(&self) -> bool {
        let mime = self.mime();
        mime.is_empty() || mime == "text/html" || mime == "application/xhtml+xml"
    }

    /// 是否为其他文本类型
    pub fn is_text(&self) -> bool {
        self.mime().starts_with("text/")
    }

    /// 是否为图片
    pub fn is_image(&self) -> bool {
        self.mime().starts_with("image/")
    }

    /// 以UTF-8（有损）解码响应体
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }

    fn mime(&self) -> String {
        self.content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase()
    }
}

/// 页面抓取特质
///
/// 每次调用执行一次GET请求，不重试
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 执行抓取
    async fn fetch(&self, url: &str) -> Result<FetchedContent, FetchError>;

    /// 抓取器名称
    fn name(&self) -> &'static str;
}
