// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 内容存储中的文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Text,
    Image,
}

impl FileKind {
    /// 根据已存储文件名推断类型，文本文件统一使用 `.txt` 后缀
    pub fn from_filename(filename: &str) -> Self {
        if filename.ends_with(".txt") {
            FileKind::Text
        } else {
            FileKind::Image
        }
    }
}

/// 已存储的文件
///
/// 抓取时创建，之后只读
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub kind: FileKind,
}

impl StoredFile {
    /// 响应时使用的 Content-Type
    pub fn content_type(&self) -> String {
        match self.kind {
            FileKind::Text => "text/plain; charset=utf-8".to_string(),
            FileKind::Image => image_content_type(&self.filename).to_string(),
        }
    }
}

/// 按扩展名推断图片的 Content-Type，无法识别时为 `application/octet-stream`
fn image_content_type(filename: &str) -> &'static str {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" | "jpe" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "ico" => "image/x-icon",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}
