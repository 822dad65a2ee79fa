// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::task::{NewTask, TaskChanges, TaskStatus};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 创建任务请求DTO
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateTaskDto {
    /// 任务标题（必填）
    #[validate(length(min = 1, max = 100))]
    pub title: String,

    /// 任务描述
    #[validate(length(max = 500))]
    pub description: Option<String>,

    /// 初始状态，缺省为 `pending`
    pub status: Option<TaskStatus>,
}

impl From<CreateTaskDto> for NewTask {
    fn from(dto: CreateTaskDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            status: dto.status.unwrap_or_default(),
        }
    }
}

/// 更新任务请求DTO
///
/// 所有字段可选，但至少需要提供一个
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
pub struct UpdateTaskDto {
    #[validate(length(min = 1, max = 100))]
    pub title: Option<String>,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    pub status: Option<TaskStatus>,
}

impl From<UpdateTaskDto> for TaskChanges {
    fn from(dto: UpdateTaskDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            status: dto.status,
        }
    }
}
