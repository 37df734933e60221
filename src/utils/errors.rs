// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::DbErr;
use thiserror::Error;

/// 仓库层错误类型
///
/// 所有仓库实现共享的错误，存储失败时当前工作单元已回滚
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 数据库中存在无法解析的值
    #[error("Corrupt record: {0}")]
    Corrupt(String),
}
