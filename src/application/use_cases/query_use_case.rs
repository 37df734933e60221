// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    application::use_cases::error::UseCaseError,
    domain::{
        models::{
            route::Route,
            status::RouteStatus,
            stop::Stop,
            street::Street,
            user::{Driver, Resident},
        },
        repositories::{
            route_repository::RouteRepository, stop_repository::StopRepository,
            street_repository::StreetRepository, user_repository::UserRepository,
        },
    },
};
use std::sync::Arc;

/// 只读查询用例
///
/// 公开读取，不做权限校验；父实体不存在时返回空列表
pub struct QueryUseCase<UR, RR, STR, SR> {
    user_repo: Arc<UR>,
    route_repo: Arc<RR>,
    street_repo: Arc<STR>,
    stop_repo: Arc<SR>,
}

impl<UR, RR, STR, SR> QueryUseCase<UR, RR, STR, SR>
where
    UR: UserRepository + 'static,
    RR: RouteRepository + 'static,
    STR: StreetRepository + 'static,
    SR: StopRepository + 'static,
{
    pub fn new(
        user_repo: Arc<UR>,
        route_repo: Arc<RR>,
        street_repo: Arc<STR>,
        stop_repo: Arc<SR>,
    ) -> Self {
        Self {
            user_repo,
            route_repo,
            street_repo,
            stop_repo,
        }
    }

    pub async fn list_drivers(&self) -> Result<Vec<Driver>, UseCaseError> {
        Ok(self.user_repo.list_drivers().await?)
    }

    pub async fn list_residents(&self) -> Result<Vec<Resident>, UseCaseError> {
        Ok(self.user_repo.list_residents().await?)
    }

    pub async fn routes_by_driver(&self, driver_id: i32) -> Result<Vec<Route>, UseCaseError> {
        Ok(self.route_repo.find_by_driver(driver_id).await?)
    }

    pub async fn stops_by_resident(&self, resident_id: i32) -> Result<Vec<Stop>, UseCaseError> {
        Ok(self.stop_repo.find_by_resident(resident_id).await?)
    }

    pub async fn streets_by_route(&self, route_id: i32) -> Result<Vec<Street>, UseCaseError> {
        Ok(self.street_repo.find_by_route(route_id).await?)
    }

    pub async fn list_streets(&self) -> Result<Vec<Street>, UseCaseError> {
        Ok(self.street_repo.list_all().await?)
    }

    /// 全部状态为 active 的路线
    pub async fn active_routes(&self) -> Result<Vec<Route>, UseCaseError> {
        Ok(self.route_repo.find_by_status(RouteStatus::Active).await?)
    }
}
