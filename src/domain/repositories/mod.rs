// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 账户仓库（user_repository）：司机与居民账户
/// - 路线仓库（route_repository）：路线及其批量街道的原子创建
/// - 街道仓库（street_repository）：街道追加与查询
/// - 站点仓库（stop_repository）：站点请求与状态更新
///
/// 每个实现都在构造时注入数据库连接，不依赖全局会话。
pub mod route_repository;
pub mod stop_repository;
pub mod street_repository;
pub mod user_repository;
