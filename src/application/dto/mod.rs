// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义应用程序层的数据传输对象
/// 输入对象携带校验规则，输出对象定义组合视图的字段名
pub mod account_request;
pub mod route_request;
pub mod tracking_response;
