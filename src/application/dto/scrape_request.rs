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
#[derive(Debug, Deserialize, Serialize)]
pub struct ScrapeRequestDto {
    /// 种子URL
    pub url: String,
    /// 最多访问的页面数，缺省使用配置的默认值
    pub max_pages: Option<usize>,
}

impl ScrapeRequestDto {
    /// 解析出实际使用的页面上限
    ///
    /// # 返回值
    ///
    /// * `Ok(usize)` - 介于 `1..=limit` 的页面数
    /// * `Err(String)` - 超出范围时的错误消息
    pub fn resolve_max_pages(&self, default: usize, limit: usize) -> Result<usize, String> {
        let max_pages = self.max_pages.unwrap_or(default);
        if max_pages == 0 || max_pages > limit {
            return Err(format!("max_pages must be between 1 and {}", limit));
        }
        Ok(max_pages)
    }
}
