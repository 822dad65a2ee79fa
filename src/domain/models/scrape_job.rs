// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 一次抓取任务的状态与结果
///
/// 只在单个抓取请求的生命周期内存在，不持久化
#[derive(Debug, Clone)]
pub struct ScrapeJob {
    /// 种子URL
    pub seed_url: String,
    /// 已访问的URL集合
    pub visited: HashSet<String>,
    /// 最多访问的页面数
    pub max_pages: usize,
    /// 按广度优先顺序排列的页面结果
    pub results: Vec<PageResult>,
    /// 成功抓取（HTTP层面）的页面数
    pub pages_fetched: usize,
}

impl ScrapeJob {
    pub fn new(seed_url: impl Into<String>, max_pages: usize) -> Self {
        Self {
            seed_url: seed_url.into(),
            visited: HashSet::new(),
            max_pages,
            results: Vec::new(),
            pages_fetched: 0,
        }
    }
}

/// 单个URL的抓取结果
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub url: String,
    pub saved_text_filename: Option<String>,
    pub saved_image_filenames: Vec<String>,
    /// 成功保存的图片及其来源URL
    pub images: Vec<SavedImage>,
    pub failed_images: Vec<FailedImage>,
    pub error: Option<String>,
}

impl PageResult {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub(crate) fn record_image(&mut self, url: String, filename: String) {
        self.saved_image_filenames.push(filename.clone());
        self.images.push(SavedImage { url, filename });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedImage {
    pub url: String,
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailedImage {
    pub url: String,
    pub error: String,
}
