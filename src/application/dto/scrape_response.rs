// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::scrape_job::{PageResult, ScrapeJob};
use serde::{Deserialize, Serialize};

/// 抓取响应DTO
#[derive(Debug, Serialize, Deserialize)]
pub struct ScrapeResponseDto {
    /// HTTP层面成功抓取的页面数
    pub pages_fetched: usize,
    /// 按访问顺序排列的页面结果
    pub pages: Vec<PageResult>,
}

impl From<ScrapeJob> for ScrapeResponseDto {
    fn from(job: ScrapeJob) -> Self {
        Self {
            pages_fetched: job.pages_fetched,
            pages: job.results,
        }
    }
}
