// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::status::DomainError;
use crate::domain::services::credential_service::CredentialError;
use crate::utils::errors::RepositoryError;
use metrics::counter;
use thiserror::Error;
use validator::ValidationErrors;

/// 用例错误类型
///
/// 每种失败都有独立的变体，调用方可以区分“不存在”“无权操作”与业务冲突。
#[derive(Error, Debug)]
pub enum UseCaseError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },
    #[error("Not permitted")]
    NotPermitted,
    #[error("{0}")]
    Conflict(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),
}

impl UseCaseError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// 构造业务冲突并计数
    pub fn conflict(message: impl Into<String>) -> Self {
        counter!("domain_conflicts_total").increment(1);
        Self::Conflict(message.into())
    }
}

impl From<DomainError> for UseCaseError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidStateTransition { .. } | DomainError::NotCancellable(_) => {
                Self::conflict(err.to_string())
            }
            DomainError::UnknownStatus(_) | DomainError::ValidationError(_) => {
                Self::Validation(err.to_string())
            }
        }
    }
}

impl From<ValidationErrors> for UseCaseError {
    fn from(err: ValidationErrors) -> Self {
        Self::Validation(err.to_string())
    }
}
