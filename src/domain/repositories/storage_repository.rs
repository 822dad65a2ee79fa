// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::stored_file::StoredFile;
use async_trait::async_trait;
use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// 文件不存在，或文件名不是存储生成的合法名称
    #[error("File not found: {0}")]
    NotFound(String),
}

/// 内容存储特质
///
/// 保存抓取到的文本和图片，并按文件名取回。
/// 返回的文件名在文件被外部删除之前都可以通过 `retrieve` 取回。
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// 保存文本，返回最终文件名
    async fn save_text(&self, suggested_name: &str, text: &str) -> Result<String, StorageError>;

    /// 保存图片字节，返回最终文件名
    async fn save_image(&self, suggested_name: &str, bytes: &[u8])
        -> Result<String, StorageError>;

    /// 根据文件名取回文件
    async fn retrieve(&self, filename: &str) -> Result<StoredFile, StorageError>;
}
