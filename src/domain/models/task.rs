// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Duration, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 任务实体
///
/// 表示一条待办记录。`id` 与 `created_at` 在创建后不可变，
/// 每次修改都会推进 `updated_at`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// 任务唯一标识符，由数据库生成
    pub id: i32,
    /// 任务标题
    pub title: String,
    /// 任务描述
    pub description: Option<String>,
    /// 任务状态
    pub status: TaskStatus,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
    /// 最后更新时间
    pub updated_at: DateTime<FixedOffset>,
}

/// 任务状态枚举
///
/// Pending → InProgress → Completed，允许任意方向的手动修改
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// 待处理
    #[default]
    Pending,
    /// 进行中
    InProgress,
    /// 已完成
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TaskStatus::Pending => write!(f, "pending"),
            TaskStatus::InProgress => write!(f, "in_progress"),
            TaskStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(DomainError::ValidationError(format!(
                "unknown task status: {}",
                other
            ))),
        }
    }
}

/// 领域错误类型
#[derive(Error, Debug)]
pub enum DomainError {
    /// 验证错误，当输入数据不符合领域规则时发生
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// 新建任务所需的数据
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
}

/// 任务的部分更新，`None` 表示保持原值
#[derive(Debug, Clone, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskChanges {
    /// 是否没有任何字段需要更新
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

impl Task {
    /// 应用部分更新并推进 `updated_at`
    ///
    /// `updated_at` 严格大于修改前的值，即使时钟分辨率不足以区分两次写入
    pub fn apply(&mut self, changes: TaskChanges) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = Some(description);
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        self.touch();
    }

    fn touch(&mut self) {
        let now: DateTime<FixedOffset> = Utc::now().into();
        let floor = self.updated_at + Duration::microseconds(1);
        self.updated_at = if now > floor { now } else { floor };
    }
}
