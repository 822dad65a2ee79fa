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

use thiserror::Error;
use url::Url;

/// 验证错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// URL无效
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// 不支持的协议
    #[error("Unsupported URL scheme: {0}")]
    UnsupportedScheme(String),
    /// URL缺少主机名
    #[error("URL has no host")]
    MissingHost,
}

/// 验证抓取的种子URL
///
/// 只接受带主机名的 http/https URL
///
/// # 参数
///
/// * `url` - URL字符串
///
/// # 返回值
///
/// * `Ok(Url)` - 解析后的URL
/// * `Err(ValidationError)` - URL无效
pub fn validate_url(url: &str) -> Result<Url, ValidationError> {
    let parsed =
        Url::parse(url.trim()).map_err(|e| ValidationError::InvalidUrl(e.to_string()))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ValidationError::UnsupportedScheme(
            parsed.scheme().to_string(),
        ));
    }

    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(ValidationError::MissingHost);
    }

    Ok(parsed)
}
