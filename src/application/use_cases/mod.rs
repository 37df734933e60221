// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 包含应用程序的所有业务用例实现
/// 每个用例代表一组完整的业务流程，所有用例共享 `UseCaseError`
pub mod account_use_case;
pub mod error;
pub mod query_use_case;
pub mod route_use_case;
pub mod stop_use_case;
pub mod tracking_use_case;
