// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 定义数据库表对应的实体结构
/// 使用SeaORM框架进行对象关系映射
/// 账户采用连接表继承：users 基表 + drivers / residents 子类型表
pub mod driver;
pub mod resident;
pub mod route;
pub mod stop;
pub mod street;
pub mod user;
