// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::routing::get;
use axum::Router;

use crate::presentation::handlers::task_handler;

/// 创建任务相关路由
///
/// # 返回值
///
/// 返回配置好的任务CRUD路由
pub fn task_routes() -> Router {
    Router::new()
        .route(
            "/tasks",
            get(task_handler::list_tasks).post(task_handler::create_task),
        )
        .route(
            "/tasks/{id}",
            get(task_handler::get_task)
                .put(task_handler::update_task)
                .delete(task_handler::delete_task),
        )
}
