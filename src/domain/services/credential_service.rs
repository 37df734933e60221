// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 凭证错误类型
#[derive(Error, Debug)]
pub enum CredentialError {
    /// 哈希参数无效
    #[error("Invalid hasher configuration: {0}")]
    Configuration(String),
    /// 生成摘要失败
    #[error("Failed to hash credential")]
    Hash,
}

/// 凭证哈希特质
///
/// 原始口令只在 `hash` 与 `verify` 调用期间存在，永远不会被存储或直接比较。
pub trait CredentialHasher: Send + Sync {
    /// 生成带盐的单向摘要
    fn hash(&self, raw: &str) -> Result<String, CredentialError>;

    /// 校验原始口令是否与摘要匹配
    ///
    /// 摘要格式损坏时返回 `false`
    fn verify(&self, raw: &str, digest: &str) -> bool;
}
