// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含司机、居民可执行的用例以及输入输出 DTO
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、状态生命周期规则和仓库接口
pub mod domain;

/// 基础设施模块
///
/// 提供数据库实体、仓库实现、凭证哈希与指标
pub mod infrastructure;

/// 工具模块
///
/// 提供通用的错误类型和日志初始化
pub mod utils;
