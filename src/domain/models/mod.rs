// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 任务（task）：持久化的待办记录
/// - 抓取任务（scrape_job）：一次抓取请求的临时状态与逐页结果
/// - 已存储文件（stored_file）：内容存储中的文本或图片
pub mod scrape_job;
pub mod stored_file;
pub mod task;
