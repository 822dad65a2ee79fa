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

use crate::config::settings::ScraperSettings;
use crate::engines::traits::{FetchError, FetchedContent, PageFetcher};
use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::time::{Duration, Instant};
use tracing::debug;

const MAX_REDIRECTS: usize = 10;

/// 抓取引擎
///
/// 基于reqwest实现的HTTP抓取器，客户端在实例间复用连接池
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl ReqwestFetcher {
    /// 创建抓取器
    ///
    /// # 参数
    ///
    /// * `timeout` - 单次请求（含读取响应体）的超时时间
    /// * `user_agent` - 请求使用的 User-Agent
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    pub fn from_settings(settings: &ScraperSettings) -> Result<Self, FetchError> {
        Self::new(settings.request_timeout(), &settings.user_agent)
    }

    fn classify(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else if err.is_builder() {
            FetchError::InvalidUrl(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    /// 执行HTTP抓取
    ///
    /// 跟随重定向，非2xx状态码视为失败
    async fn fetch(&self, url: &str) -> Result<FetchedContent, FetchError> {
        let parsed = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;

        let start = Instant::now();
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let final_url = response.url().to_string();
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: final_url,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(self.timeout)
            } else {
                FetchError::Body(e.to_string())
            }
        })?;

        debug!(
            "Fetched {} ({} bytes, {:?}) in {}ms",
            final_url,
            bytes.len(),
            content_type,
            start.elapsed().as_millis()
        );

        Ok(FetchedContent {
            bytes,
            content_type,
            final_url,
        })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
