// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::{NewTask, Task, TaskChanges};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 任务仓库特质
///
/// 定义任务数据访问接口
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 按ID升序列出所有任务
    async fn list(&self) -> Result<Vec<Task>, RepositoryError>;
    /// 根据ID查找任务
    async fn find_by_id(&self, id: i32) -> Result<Option<Task>, RepositoryError>;
    /// 创建新任务，返回带有生成ID的记录
    async fn create(&self, task: NewTask) -> Result<Task, RepositoryError>;
    /// 部分更新任务，任务不存在时返回 `NotFound`
    async fn update(&self, id: i32, changes: TaskChanges) -> Result<Task, RepositoryError>;
    /// 删除任务，任务不存在时返回 `NotFound`
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
