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

use crate::domain::models::task::{NewTask, Task, TaskChanges};
use crate::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use crate::infrastructure::database::entities::task as task_entity;
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set, Unchanged};
use std::sync::Arc;
use tracing::warn;

/// 任务仓库实现
///
/// 基于SeaORM实现的任务数据访问层
#[derive(Clone)]
pub struct TaskRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryImpl {
    /// 创建新的任务仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<task_entity::Model> for Task {
    fn from(model: task_entity::Model) -> Self {
        let status = model.status.parse().unwrap_or_else(|_| {
            warn!(
                "Task {} has unknown status {:?}, treating as pending",
                model.id, model.status
            );
            Default::default()
        });
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<Task> for task_entity::ActiveModel {
    fn from(task: Task) -> Self {
        Self {
            id: Set(task.id),
            title: Set(task.title),
            description: Set(task.description),
            status: Set(task.status.to_string()),
            created_at: Set(task.created_at),
            updated_at: Set(task.updated_at),
        }
    }
}

#[async_trait]
impl TaskRepository for TaskRepositoryImpl {
    async fn list(&self) -> Result<Vec<Task>, RepositoryError> {
        let models = task_entity::Entity::find()
            .order_by_asc(task_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Task>, RepositoryError> {
        let model = task_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, task: NewTask) -> Result<Task, RepositoryError> {
        let now: DateTime<FixedOffset> = Utc::now().into();
        let model = task_entity::ActiveModel {
            id: NotSet,
            title: Set(task.title),
            description: Set(task.description),
            status: Set(task.status.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn update(&self, id: i32, changes: TaskChanges) -> Result<Task, RepositoryError> {
        let mut task = self
            .find_by_id(id)
            .await?
            .ok_or(RepositoryError::NotFound)?;
        task.apply(changes);

        let mut model: task_entity::ActiveModel = task.into();
        // Identity columns stay untouched
        model.id = Unchanged(id);
        model.created_at = NotSet;

        let updated = model.update(self.db.as_ref()).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = task_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
