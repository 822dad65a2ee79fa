// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::storage_repository::ContentStore;
use crate::presentation::errors::AppError;
use axum::{
    extract::{Extension, Path},
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;

/// 内容存储在请求扩展中的类型
pub type SharedContentStore = Arc<dyn ContentStore>;

/// 按文件名返回已保存的文本或图片
pub async fn get_file(
    Extension(store): Extension<SharedContentStore>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let file = store.retrieve(&filename).await?;
    let content_type = file.content_type();
    Ok(([(header::CONTENT_TYPE, content_type)], file.bytes))
}
