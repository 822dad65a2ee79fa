// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供：
/// - 存储仓库（storage_repository）：抓取内容的保存与读取
/// - 任务仓库（task_repository）：任务的增删改查
pub mod storage_repository;
pub mod task_repository;
