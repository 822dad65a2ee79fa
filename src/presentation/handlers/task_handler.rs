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

use crate::application::dto::task_request::{CreateTaskDto, UpdateTaskDto};
use crate::domain::models::task::{Task, TaskChanges};
use crate::domain::repositories::task_repository::TaskRepository;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::task_id::TaskId;
use axum::{body::Bytes, extract::Extension, http::StatusCode, Json};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

/// 任务仓库在请求扩展中的类型
pub type SharedTaskRepository = Arc<dyn TaskRepository>;

const NO_INPUT: &str = "No input data provided";

/// 解析JSON请求体，请求体为空（或只有空白）时返回统一的提示
fn json_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::Validation(NO_INPUT.to_string()));
    }
    let Json(value) = Json::<T>::from_bytes(body)?;
    Ok(value)
}

/// 列出所有任务，按ID升序
pub async fn list_tasks(
    Extension(repo): Extension<SharedTaskRepository>,
) -> Result<Json<Vec<Task>>, AppError> {
    Ok(Json(repo.list().await?))
}

/// 获取单个任务
pub async fn get_task(
    Extension(repo): Extension<SharedTaskRepository>,
    TaskId(id): TaskId,
) -> Result<Json<Task>, AppError> {
    repo.find_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Task {} not found", id)))
}

/// 创建任务
///
/// # 返回值
///
/// * `201 Created` - 新任务，状态缺省为 `pending`
/// * `400 Bad Request` - 请求体缺失或校验失败
pub async fn create_task(
    Extension(repo): Extension<SharedTaskRepository>,
    body: Bytes,
) -> Result<(StatusCode, Json<Task>), AppError> {
    let dto: CreateTaskDto = json_body(&body)?;
    dto.validate()?;

    let task = repo.create(dto.into()).await?;
    info!("Created task {} ({})", task.id, task.status);
    Ok((StatusCode::CREATED, Json(task)))
}

/// 部分更新任务
pub async fn update_task(
    Extension(repo): Extension<SharedTaskRepository>,
    TaskId(id): TaskId,
    body: Bytes,
) -> Result<Json<Task>, AppError> {
    let dto: UpdateTaskDto = json_body(&body)?;
    dto.validate()?;

    let changes: TaskChanges = dto.into();
    if changes.is_empty() {
        return Err(AppError::Validation(NO_INPUT.to_string()));
    }

    let task = repo.update(id, changes).await?;
    info!("Updated task {}", task.id);
    Ok(Json(task))
}

/// 删除任务
pub async fn delete_task(
    Extension(repo): Extension<SharedTaskRepository>,
    TaskId(id): TaskId,
) -> Result<StatusCode, AppError> {
    repo.delete(id).await?;
    info!("Deleted task {}", id);
    Ok(StatusCode::NO_CONTENT)
}
