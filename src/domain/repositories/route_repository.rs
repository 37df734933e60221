// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::route::{NewRoute, Route};
use crate::domain::models::status::RouteStatus;
use crate::domain::models::street::{NewStreet, Street};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 路线仓库特质
///
/// 定义路线数据访问接口
#[async_trait]
pub trait RouteRepository: Send + Sync {
    /// 原子地创建路线及其街道
    ///
    /// # 参数
    ///
    /// * `route` - 待创建的路线
    /// * `streets` - 随路线一起创建的街道，可以为空
    ///
    /// # 返回值
    ///
    /// * `Ok((Route, Vec<Street>))` - 路线与全部街道都已提交
    /// * `Err(RepositoryError)` - 任一写入失败，整个事务回滚，不留下任何行
    async fn create_with_streets(
        &self,
        route: &NewRoute,
        streets: &[NewStreet],
    ) -> Result<(Route, Vec<Street>), RepositoryError>;

    /// 根据ID查找路线
    async fn find_by_id(&self, id: i32) -> Result<Option<Route>, RepositoryError>;

    /// 查找司机名下的全部路线
    async fn find_by_driver(&self, driver_id: i32) -> Result<Vec<Route>, RepositoryError>;

    /// 查找司机名下指定状态的路线
    async fn find_by_driver_and_status(
        &self,
        driver_id: i32,
        status: RouteStatus,
    ) -> Result<Vec<Route>, RepositoryError>;

    /// 按状态查找路线
    async fn find_by_status(&self, status: RouteStatus) -> Result<Vec<Route>, RepositoryError>;

    /// 覆盖写入日期、时间与状态（后写者胜出，没有版本检查）
    async fn update(&self, route: &Route) -> Result<Route, RepositoryError>;
}
