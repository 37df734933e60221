// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::AuthSettings;
use crate::domain::services::credential_service::{CredentialError, CredentialHasher};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

/// 基于 Argon2id 的凭证哈希实现
///
/// 摘要为 PHC 字符串，自带盐和代价参数，因此调整配置不会使旧摘要失效。
#[derive(Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    /// 根据配置创建哈希器
    ///
    /// # 参数
    ///
    /// * `settings` - Argon2id 代价参数
    ///
    /// # 返回值
    ///
    /// * `Ok(Argon2Hasher)` - 参数合法
    /// * `Err(CredentialError::Configuration)` - 参数超出 Argon2 允许范围
    pub fn new(settings: &AuthSettings) -> Result<Self, CredentialError> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| CredentialError::Configuration(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

impl CredentialHasher for Argon2Hasher {
    fn hash(&self, raw: &str) -> Result<String, CredentialError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(raw.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| CredentialError::Hash)
    }

    fn verify(&self, raw: &str, digest: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(digest) else {
            return false;
        };

        self.argon2
            .verify_password(raw.as_bytes(), &parsed)
            .is_ok()
    }
}
