// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::status::StopStatus;
use crate::domain::models::stop::{NewStop, Stop};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 站点仓库特质
///
/// 定义站点数据访问接口，包括按关系图遍历的聚合查询
#[async_trait]
pub trait StopRepository: Send + Sync {
    /// 创建站点，初始状态为 Requested
    async fn create(&self, stop: &NewStop) -> Result<Stop, RepositoryError>;

    /// 根据ID查找站点
    async fn find_by_id(&self, id: i32) -> Result<Option<Stop>, RepositoryError>;

    /// 查找居民在某街道上未取消的站点
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Stop))` - 已存在占用名额的站点
    /// * `Ok(None)` - 可以创建新的站点
    async fn find_open_by_resident_and_street(
        &self,
        resident_id: i32,
        street_id: i32,
    ) -> Result<Option<Stop>, RepositoryError>;

    /// 查找居民的全部站点
    async fn find_by_resident(&self, resident_id: i32) -> Result<Vec<Stop>, RepositoryError>;

    /// 查找路线下所有街道上的站点
    async fn find_by_route(&self, route_id: i32) -> Result<Vec<Stop>, RepositoryError>;

    /// 查找司机所有路线下所有街道上的站点
    async fn find_by_driver(&self, driver_id: i32) -> Result<Vec<Stop>, RepositoryError>;

    /// 仅当站点当前状态为 `from` 时将其更新为 `to`
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Stop))` - 更新后的站点
    /// * `Ok(None)` - 站点不存在或状态已被修改
    async fn update_status(
        &self,
        id: i32,
        from: StopStatus,
        to: StopStatus,
    ) -> Result<Option<Stop>, RepositoryError>;
}
