// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供领域层接口的具体实现：
/// - 数据库（database）：连接池、迁移和实体映射
/// - 仓库实现（repositories）：基于SeaORM的任务仓库
/// - 存储（storage）：本地文件系统与内存内容存储
pub mod database;
pub mod repositories;
pub mod storage;
