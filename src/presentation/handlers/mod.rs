// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 处理器模块
///
/// 包含任务、抓取和文件下载的HTTP处理器
pub mod file_handler;
pub mod scrape_handler;
pub mod task_handler;
