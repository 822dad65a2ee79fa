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

use crate::domain::models::scrape_job::{FailedImage, PageResult, ScrapeJob};
use crate::domain::repositories::storage_repository::ContentStore;
use crate::domain::services::extraction_service::{ExtractedPage, ExtractionService};
use crate::engines::traits::{FetchError, FetchedContent, PageFetcher};
use crate::utils::url_utils::same_domain;
use crate::utils::validators::{validate_url, ValidationError};
use std::collections::{HashSet, VecDeque};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

/// 抓取错误类型
///
/// 只有种子URL本身的问题才会让整个抓取失败，其余页面的错误记录在结果中
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// 种子URL无效
    #[error("Invalid seed URL: {0}")]
    InvalidSeed(#[from] ValidationError),
    /// 种子URL抓取失败
    #[error("Failed to fetch seed URL {url}: {source}")]
    SeedFetch {
        url: String,
        #[source]
        source: FetchError,
    },
}

/// 抓取服务
///
/// 从种子URL开始按广度优先抓取同域页面，保存文本和图片
pub struct ScrapeService {
    /// 页面抓取器
    fetcher: Arc<dyn PageFetcher>,
    /// 内容存储
    store: Arc<dyn ContentStore>,
}

impl ScrapeService {
    /// 创建新的抓取服务实例
    pub fn new(fetcher: Arc<dyn PageFetcher>, store: Arc<dyn ContentStore>) -> Self {
        Self { fetcher, store }
    }

    /// 执行一次抓取
    ///
    /// 页面按先进先出顺序逐个抓取，访问数达到 `max_pages` 或队列为空时结束
    ///
    /// # 参数
    ///
    /// * `seed_url` - 种子URL
    /// * `max_pages` - 最多访问的页面数（含失败的页面）
    ///
    /// # 返回值
    ///
    /// * `Ok(ScrapeJob)` - 抓取结果，单个页面或图片的失败记录在结果中
    /// * `Err(ScrapeError)` - 种子URL无效或无法抓取
    pub async fn scrape(&self, seed_url: &str, max_pages: usize) -> Result<ScrapeJob, ScrapeError> {
        let seed = validate_url(seed_url)?.to_string();
        let started = Instant::now();
        info!(
            "Starting scrape of {} with {} fetcher (max_pages={})",
            seed,
            self.fetcher.name(),
            max_pages
        );

        let mut job = ScrapeJob::new(seed.clone(), max_pages);
        let mut frontier = VecDeque::from([seed.clone()]);
        // Everything ever pushed to the frontier, plus redirect targets
        let mut queued = HashSet::from([seed]);

        while job.visited.len() < job.max_pages {
            let Some(url) = frontier.pop_front() else {
                break;
            };
            if !job.visited.insert(url.clone()) {
                continue;
            }

            let is_seed = job.results.is_empty();
            let content = match self.fetcher.fetch(&url).await {
                Ok(content) => content,
                Err(e) if is_seed => {
                    warn!("Seed URL {} could not be fetched: {}", url, e);
                    return Err(ScrapeError::SeedFetch { url, source: e });
                }
                Err(e) => {
                    warn!("Failed to fetch {}: {}", url, e);
                    job.results.push(PageResult::failed(url, e.to_string()));
                    continue;
                }
            };
            job.pages_fetched += 1;
            queued.insert(content.final_url.clone());

            let (page, links) = self.process_page(&url, content).await;
            job.results.push(page);

            for link in links {
                if same_domain(&job.seed_url, &link)
                    && !job.visited.contains(&link)
                    && queued.insert(link.clone())
                {
                    frontier.push_back(link);
                }
            }
        }

        info!(
            "Scrape of {} finished: {} visited, {} fetched, {} pending in {}ms",
            job.seed_url,
            job.visited.len(),
            job.pages_fetched,
            frontier.len(),
            started.elapsed().as_millis()
        );
        Ok(job)
    }

    /// 处理一个已抓取的页面，返回页面结果和发现的链接
    async fn process_page(&self, url: &str, content: FetchedContent) -> (PageResult, Vec<String>) {
        let mut page = PageResult::new(url);

        let extracted = if content.is_html() {
            match ExtractionService::extract(&content.text(), &content.final_url) {
                Ok(extracted) => extracted,
                Err(e) => {
                    warn!("Failed to parse {}: {}", url, e);
                    page.error = Some(e.to_string());
                    return (page, Vec::new());
                }
            }
        } else if content.is_text() {
            ExtractedPage {
                text: ExtractionService::normalize_whitespace(&content.text()),
                ..Default::default()
            }
        } else if content.is_image() {
            self.save_image(&mut page, &content.final_url, &content.bytes)
                .await;
            return (page, Vec::new());
        } else {
            page.error = Some(format!("Unsupported content type: {}", content.content_type));
            return (page, Vec::new());
        };

        match self
            .store
            .save_text(&page_name(&content.final_url), &extracted.text)
            .await
        {
            Ok(filename) => page.saved_text_filename = Some(filename),
            Err(e) => {
                warn!("Failed to save text for {}: {}", url, e);
                page.error = Some(format!("Failed to save text: {}", e));
            }
        }

        for image_url in &extracted.image_urls {
            match self.fetcher.fetch(image_url).await {
                Ok(image) if image.is_image() => {
                    self.save_image(&mut page, image_url, &image.bytes).await
                }
                Ok(other) => {
                    debug!(
                        "Image URL {} returned {}, not an image",
                        image_url, other.content_type
                    );
                    page.failed_images.push(FailedImage {
                        url: image_url.clone(),
                        error: format!("Not an image: {}", other.content_type),
                    });
                }
                Err(e) => {
                    debug!("Failed to fetch image {}: {}", image_url, e);
                    page.failed_images.push(FailedImage {
                        url: image_url.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        debug!(
            "Processed {}: {} chars, {} images, {} links",
            url,
            extracted.text.len(),
            page.saved_image_filenames.len(),
            extracted.link_urls.len()
        );
        (page, extracted.link_urls)
    }

    async fn save_image(&self, page: &mut PageResult, image_url: &str, bytes: &[u8]) {
        match self.store.save_image(&image_name(image_url), bytes).await {
            Ok(filename) => page.record_image(image_url.to_string(), filename),
            Err(e) => {
                warn!("Failed to save image {}: {}", image_url, e);
                page.failed_images.push(FailedImage {
                    url: image_url.to_string(),
                    error: format!("Failed to save image: {}", e),
                });
            }
        }
    }
}

/// 页面文本的建议文件名：主机名加路径，`/` 替换为 `_`
fn page_name(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return "page".to_string();
    };
    let host = parsed.host_str().unwrap_or("page");
    let path = parsed.path().trim_matches('/').replace('/', "_");
    if path.is_empty() {
        host.to_string()
    } else {
        format!("{}_{}", host, path)
    }
}

/// 图片的建议文件名：URL路径的最后一段
fn image_name(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .filter(|segment| !segment.is_empty())
        .unwrap_or_else(|| "image".to_string())
}

#[cfg(test)]
#[path = "scrape_service_test.rs"]
mod tests;
