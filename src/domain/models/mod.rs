// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 账户（user）：司机与居民两种账户变体
/// - 路线（route）：司机在某天某时执行的一次收运
/// - 街道（street）：路线中的一段，居民站点请求挂在街道上
/// - 站点（stop）：居民在某条街道上的收运请求
/// - 状态（status）：路线与站点的状态机和领域错误
pub mod route;
pub mod status;
pub mod stop;
pub mod street;
pub mod user;
