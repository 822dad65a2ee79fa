// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::domain::services::scrape_service::ScrapeService;
use crate::presentation::errors::AppError;
use crate::presentation::handlers::file_handler::{self, SharedContentStore};
use crate::presentation::handlers::scrape_handler;
use crate::presentation::handlers::task_handler::SharedTaskRepository;
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use crate::presentation::middleware::scrape_semaphore::ScrapeSemaphore;
use axum::{
    http::Uri,
    middleware,
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod task;

/// 路由依赖的共享组件
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub task_repo: SharedTaskRepository,
    pub store: SharedContentStore,
    pub scrape_service: Arc<ScrapeService>,
}

/// 未匹配路由的JSON 404
async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// 创建应用路由
///
/// 所有端点都在API密钥认证之后
///
/// # 参数
///
/// * `state` - 共享组件
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(state: AppState) -> Router {
    let auth_state = AuthState::new(state.settings.auth.api_key.as_str());
    let semaphore = ScrapeSemaphore::new(state.settings.scraper.max_concurrent_jobs);

    Router::new()
        .merge(task::task_routes())
        .route("/scrape", post(scrape_handler::create_scrape))
        .route("/files/{filename}", get(file_handler::get_file))
        .fallback(route_not_found)
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .layer(Extension(state.task_repo))
        .layer(Extension(state.store))
        .layer(Extension(state.scrape_service))
        .layer(Extension(semaphore))
        .layer(Extension(state.settings))
        .layer(TraceLayer::new_for_http())
}
