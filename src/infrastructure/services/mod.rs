// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施服务实现
///
/// 为领域服务特质提供具体实现
pub mod argon2_hasher;
