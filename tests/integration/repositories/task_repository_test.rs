// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_app;
use taskscrape::domain::models::task::{NewTask, TaskChanges, TaskStatus};
use taskscrape::domain::repositories::task_repository::{RepositoryError, TaskRepository};
use taskscrape::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;

fn new_task(title: &str) -> NewTask {
    NewTask {
        title: title.to_string(),
        description: None,
        status: TaskStatus::default(),
    }
}

/// 测试仓库的CRUD操作
#[tokio::test]
async fn test_repository_crud_operations() {
    let app = create_test_app().await;
    let repo = TaskRepositoryImpl::new(app.db_pool.clone());

    let created = repo.create(new_task("Write report")).await.unwrap();
    assert!(created.id > 0);
    assert_eq!(created.status, TaskStatus::Pending);
    assert_eq!(created.created_at, created.updated_at);

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);

    let updated = repo
        .update(
            created.id,
            TaskChanges {
                description: Some("Quarterly numbers".to_string()),
                status: Some(TaskStatus::InProgress),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "Write report");
    assert_eq!(updated.description.as_deref(), Some("Quarterly numbers"));
    assert_eq!(updated.status, TaskStatus::InProgress);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    repo.delete(created.id).await.unwrap();
    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_list_is_ordered_by_id() {
    let app = create_test_app().await;
    let repo = TaskRepositoryImpl::new(app.db_pool.clone());

    for title in ["first", "second", "third"] {
        repo.create(new_task(title)).await.unwrap();
    }

    let tasks = repo.list().await.unwrap();
    let titles: Vec<_> = tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
    assert!(tasks.windows(2).all(|pair| pair[0].id < pair[1].id));
}

#[tokio::test]
async fn test_missing_task_is_not_found() {
    let app = create_test_app().await;
    let repo = TaskRepositoryImpl::new(app.db_pool.clone());

    assert!(repo.find_by_id(999).await.unwrap().is_none());
    assert!(matches!(
        repo.update(999, TaskChanges::default()).await,
        Err(RepositoryError::NotFound)
    ));
    assert!(matches!(repo.delete(999).await, Err(RepositoryError::NotFound)));
}

#[tokio::test]
async fn test_consecutive_updates_advance_updated_at() {
    let app = create_test_app().await;
    let repo = TaskRepositoryImpl::new(app.db_pool.clone());
    let task = repo.create(new_task("tick")).await.unwrap();

    let mut last = task.updated_at;
    for status in [TaskStatus::InProgress, TaskStatus::Completed, TaskStatus::Pending] {
        let updated = repo
            .update(
                task.id,
                TaskChanges {
                    status: Some(status),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(updated.updated_at > last);
        last = updated.updated_at;
    }
}
