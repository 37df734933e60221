// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::street::{NewStreet, Street};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 街道仓库特质
#[async_trait]
pub trait StreetRepository: Send + Sync {
    /// 在已有路线上追加街道
    async fn create(&self, route_id: i32, street: &NewStreet) -> Result<Street, RepositoryError>;
    /// 根据ID查找街道
    async fn find_by_id(&self, id: i32) -> Result<Option<Street>, RepositoryError>;
    /// 查找路线下的全部街道
    async fn find_by_route(&self, route_id: i32) -> Result<Vec<Street>, RepositoryError>;
    /// 列出全部街道
    async fn list_all(&self) -> Result<Vec<Street>, RepositoryError>;
}
