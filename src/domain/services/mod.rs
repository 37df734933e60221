// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 凭证服务（credential_service）：单向哈希与校验接口，具体算法由基础设施层提供
pub mod credential_service;
