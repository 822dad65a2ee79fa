// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;
use uuid::Uuid;

use crate::domain::models::stored_file::{FileKind, StoredFile};
use crate::domain::repositories::storage_repository::{ContentStore, StorageError};
use crate::utils::filename;

/// 本地文件系统存储实现
///
/// 所有文件平铺在 `base_path` 下，先写临时文件再重命名，保证单文件写入原子性
#[derive(Debug, Clone)]
pub struct LocalContentStore {
    base_path: PathBuf,
}

impl LocalContentStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// 确保存储目录存在
    pub async fn init(&self) -> Result<(), StorageError> {
        fs::create_dir_all(&self.base_path).await?;
        Ok(())
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    async fn write_atomically(&self, filename: &str, data: &[u8]) -> Result<(), StorageError> {
        let full_path = self.base_path.join(filename);

        // Names carry a content hash, an existing file already holds these bytes
        if fs::try_exists(&full_path).await? {
            debug!("Content already stored as {}", filename);
            return Ok(());
        }

        fs::create_dir_all(&self.base_path).await?;

        let tmp_path = self.base_path.join(format!(".tmp-{}", Uuid::new_v4()));
        let mut file = fs::File::create(&tmp_path).await?;
        let written = async {
            file.write_all(data).await?;
            file.flush().await?;
            file.sync_all().await
        }
        .await;
        drop(file);

        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(StorageError::Io(e));
        }

        if let Err(e) = fs::rename(&tmp_path, &full_path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(StorageError::Io(e));
        }

        debug!("Stored {} ({} bytes)", filename, data.len());
        Ok(())
    }
}

#[async_trait]
impl ContentStore for LocalContentStore {
    async fn save_text(&self, suggested_name: &str, text: &str) -> Result<String, StorageError> {
        let name = filename::text_filename(suggested_name, text.as_bytes());
        self.write_atomically(&name, text.as_bytes()).await?;
        Ok(name)
    }

    async fn save_image(
        &self,
        suggested_name: &str,
        bytes: &[u8],
    ) -> Result<String, StorageError> {
        let name = filename::image_filename(suggested_name, bytes);
        self.write_atomically(&name, bytes).await?;
        Ok(name)
    }

    async fn retrieve(&self, name: &str) -> Result<StoredFile, StorageError> {
        if !filename::is_stored_name(name) {
            return Err(StorageError::NotFound(name.to_string()));
        }

        match fs::read(self.base_path.join(name)).await {
            Ok(bytes) => Ok(StoredFile {
                filename: name.to_string(),
                bytes,
                kind: FileKind::from_filename(name),
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

#[cfg(test)]
pub use in_memory::InMemoryContentStore;
