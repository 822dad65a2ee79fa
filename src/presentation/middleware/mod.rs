// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 中间件模块
///
/// 提供API密钥认证和抓取并发控制
pub mod auth_middleware;
pub mod scrape_semaphore;
