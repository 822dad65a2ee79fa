// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 提取服务（extraction_service）：从HTML中提取文本、图片和链接
/// - 抓取服务（scrape_service）：同域广度优先抓取并保存内容
pub mod extraction_service;
pub mod scrape_service;
