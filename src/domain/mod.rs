// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：任务、抓取任务和已存储文件
/// - 仓库接口（repositories）：任务与内容存储的抽象接口
/// - 服务（services）：页面提取和广度优先抓取
///
/// 领域层不依赖具体的数据库或文件系统实现。
pub mod models;
pub mod repositories;
pub mod services;
