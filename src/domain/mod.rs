// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：账户、路线、街道、站点以及状态生命周期
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 服务（services）：凭证哈希等领域服务接口
///
/// 领域层不依赖于任何外部实现，具体的数据存储由基础设施层提供。
pub mod models;
pub mod repositories;
pub mod services;
