// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 存储文件名处理
//!
//! 文件名来自远程页面（URL路径、图片 `src`），必须在写入磁盘前清洗。
//! 最终文件名格式为 `{stem}-{hash}.{ext}`，其中 `hash` 为内容 SHA-256
//! 的前 12 位十六进制字符。

use sha2::{Digest, Sha256};

const MAX_STEM_LEN: usize = 64;
const MAX_EXT_LEN: usize = 5;
const MAX_STORED_NAME_LEN: usize = 128;
const HASH_LEN: usize = 12;
const FALLBACK_STEM: &str = "file";

/// 清洗单个路径组件
///
/// 只保留最后一个 `/` 或 `\` 之后的部分，非 `[A-Za-z0-9._-]` 字符替换为 `_`，
/// 折叠 `..` 并去掉前导 `.`
pub fn sanitize_component(raw: &str) -> String {
    let last = raw.rsplit(['/', '\\']).next().unwrap_or_default();

    let mut cleaned: String = last
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    while cleaned.contains("..") {
        cleaned = cleaned.replace("..", ".");
    }

    cleaned.trim_start_matches('.').to_string()
}

/// 拆分为 (主干, 扩展名)，扩展名须为不超过 5 位的字母数字
fn split_extension(name: &str) -> (&str, Option<String>) {
    match name.rsplit_once('.') {
        Some((stem, ext))
            if !stem.is_empty()
                && !ext.is_empty()
                && ext.len() <= MAX_EXT_LEN
                && ext.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            (stem, Some(ext.to_ascii_lowercase()))
        }
        _ => (name, None),
    }
}

fn finalize_stem(stem: &str) -> String {
    // ASCII-only after sanitize_component, byte slicing is safe
    let truncated = &stem[..stem.len().min(MAX_STEM_LEN)];
    let trimmed = truncated.trim_matches(|c| c == '.' || c == '_' || c == '-');
    if trimmed.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        trimmed.to_string()
    }
}

/// 内容哈希（SHA-256 前 12 位十六进制）
pub fn content_hash(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut encoded = hex::encode(digest);
    encoded.truncate(HASH_LEN);
    encoded
}

/// 文本文件的存储名，扩展名固定为 `txt`
///
/// 建议名通常是主机名加路径（如 `example.com_docs`），其中的点不视为扩展名
pub fn text_filename(suggested: &str, bytes: &[u8]) -> String {
    let sanitized = sanitize_component(suggested);
    let stem = match split_extension(&sanitized) {
        (stem, Some(ext)) if ext == "txt" => stem,
        _ => sanitized.as_str(),
    };
    format!("{}-{}.txt", finalize_stem(stem), content_hash(bytes))
}

/// 图片文件的存储名，保留清洗后的扩展名，没有时使用 `bin`
pub fn image_filename(suggested: &str, bytes: &[u8]) -> String {
    let sanitized = sanitize_component(suggested);
    let (stem, ext) = split_extension(&sanitized);
    let ext = match ext.as_deref() {
        // Never hand out a name that later resolves as a text file
        Some("txt") | None => "bin".to_string(),
        Some(other) => other.to_string(),
    };
    format!("{}-{}.{}", finalize_stem(stem), content_hash(bytes), ext)
}

/// 判断文件名是否已经是合法的存储名
///
/// 取回文件前调用，任何带路径分隔符、`..`、前导 `.` 或非法字符的名字都会被拒绝
pub fn is_stored_name(name: &str) -> bool {
    !name.is_empty()
        && name.len() <= MAX_STORED_NAME_LEN
        && !name.starts_with('.')
        && !name.contains("..")
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
}
