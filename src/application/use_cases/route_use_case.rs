// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    application::{
        dto::route_request::{ScheduleRouteDto, StreetDto, UpdateRouteDto},
        use_cases::error::UseCaseError,
    },
    domain::{
        models::{
            route::{NewRoute, Route},
            status::RouteStatus,
            street::{NewStreet, Street},
        },
        repositories::{
            route_repository::RouteRepository, street_repository::StreetRepository,
            user_repository::UserRepository,
        },
    },
};
use metrics::counter;
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

/// 路线排班用例
///
/// 司机创建、修改自己的路线，以及为路线追加街道
pub struct RouteUseCase<RR, SR, UR> {
    route_repo: Arc<RR>,
    street_repo: Arc<SR>,
    user_repo: Arc<UR>,
}

impl<RR, SR, UR> RouteUseCase<RR, SR, UR>
where
    RR: RouteRepository + 'static,
    SR: StreetRepository + 'static,
    UR: UserRepository + 'static,
{
    pub fn new(route_repo: Arc<RR>, street_repo: Arc<SR>, user_repo: Arc<UR>) -> Self {
        Self {
            route_repo,
            street_repo,
            user_repo,
        }
    }

    /// 为司机排一条新路线
    ///
    /// 路线和全部街道在同一事务中写入，任何一步失败都不会留下数据
    ///
    /// # 参数
    ///
    /// * `driver_id` - 路线所属司机
    /// * `dto` - 日期、时间以及可为空的街道列表
    ///
    /// # 返回值
    ///
    /// * `Ok((Route, Vec<Street>))` - 新路线（状态为 scheduled）和它的街道
    /// * `Err(UseCaseError)` - 输入无效、司机不存在或存储失败
    pub async fn schedule_route(
        &self,
        driver_id: i32,
        dto: ScheduleRouteDto,
    ) -> Result<(Route, Vec<Street>), UseCaseError> {
        dto.validate()?;

        // 1. Driver must exist
        if self.user_repo.find_driver(driver_id).await?.is_none() {
            return Err(UseCaseError::not_found("Driver", driver_id));
        }

        // 2. Route and streets in one unit of work
        let route = NewRoute {
            driver_id,
            drive_date: dto.drive_date,
            drive_time: dto.drive_time,
        };
        let streets: Vec<NewStreet> = dto.streets.into_iter().map(Into::into).collect();

        let (route, streets) = self
            .route_repo
            .create_with_streets(&route, &streets)
            .await?;

        counter!("routes_scheduled_total").increment(1);
        info!(
            "Driver {} scheduled route {} on {} at {} with {} streets",
            driver_id,
            route.id,
            route.drive_date,
            route.drive_time,
            streets.len()
        );

        Ok((route, streets))
    }

    /// 部分更新路线
    ///
    /// 只有路线所属司机可以修改；省略的字段保持原值，状态变更必须符合路线状态机。
    /// 并发修改按后写者胜出处理。
    pub async fn update_route(
        &self,
        driver_id: i32,
        route_id: i32,
        dto: UpdateRouteDto,
    ) -> Result<Route, UseCaseError> {
        let mut route = self
            .route_repo
            .find_by_id(route_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Route", route_id))?;

        if !route.is_owned_by(driver_id) {
            warn!(
                "Driver {} attempted to update route {} owned by driver {}",
                driver_id, route_id, route.driver_id
            );
            return Err(UseCaseError::NotPermitted);
        }

        // Parse before touching any field so a bad status leaves the route as-is.
        // An empty status counts as omitted.
        let next_status = dto
            .status
            .as_deref()
            .filter(|status| !status.is_empty())
            .map(str::parse::<RouteStatus>)
            .transpose()?;

        if let Some(date) = dto.drive_date {
            route.drive_date = date;
        }
        if let Some(time) = dto.drive_time {
            route.drive_time = time;
        }
        if let Some(next) = next_status {
            route.change_status(next)?;
        }

        let route = self.route_repo.update(&route).await?;
        info!("Route {} updated by driver {}", route.id, driver_id);

        Ok(route)
    }

    /// 为已有路线追加街道
    ///
    /// 不校验调用者身份，任何人都可以为存在的路线追加街道
    pub async fn add_street_to_route(
        &self,
        route_id: i32,
        dto: StreetDto,
    ) -> Result<Street, UseCaseError> {
        dto.validate()?;

        if self.route_repo.find_by_id(route_id).await?.is_none() {
            return Err(UseCaseError::not_found("Route", route_id));
        }

        let street = self.street_repo.create(route_id, &dto.into()).await?;
        info!("Street {} added to route {}", street.id, route_id);

        Ok(street)
    }
}
