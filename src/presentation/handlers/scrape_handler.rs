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

use axum::extract::{rejection::JsonRejection, Extension, Json};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    application::dto::{scrape_request::ScrapeRequestDto, scrape_response::ScrapeResponseDto},
    config::settings::Settings,
    domain::services::scrape_service::ScrapeService,
    presentation::{errors::AppError, middleware::scrape_semaphore::ScrapeSemaphore},
};

/// 执行一次同步抓取
///
/// 请求在全局信号量上排队，拿到许可后在当前请求内完成整个抓取
pub async fn create_scrape(
    Extension(service): Extension<Arc<ScrapeService>>,
    Extension(semaphore): Extension<ScrapeSemaphore>,
    Extension(settings): Extension<Arc<Settings>>,
    payload: Result<Json<ScrapeRequestDto>, JsonRejection>,
) -> Result<Json<ScrapeResponseDto>, AppError> {
    let Json(payload) = payload?;
    let max_pages = payload
        .resolve_max_pages(
            settings.scraper.default_max_pages,
            settings.scraper.max_pages_limit,
        )
        .map_err(AppError::Validation)?;

    debug!(
        "Scrape of {} waiting for permit ({} available)",
        payload.url,
        semaphore.available()
    );
    let _permit = semaphore
        .acquire()
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    let job = service.scrape(&payload.url, max_pages).await?;
    info!(
        "Scrape of {} returned {} pages ({} fetched)",
        job.seed_url,
        job.results.len(),
        job.pages_fetched
    );
    Ok(Json(job.into()))
}
