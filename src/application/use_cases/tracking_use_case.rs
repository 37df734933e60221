// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::{
    application::{dto::tracking_response::DriverTracking, use_cases::error::UseCaseError},
    domain::{
        models::{status::RouteStatus, stop::Stop, user::Driver},
        repositories::{
            route_repository::RouteRepository, stop_repository::StopRepository,
            user_repository::UserRepository,
        },
    },
    utils::errors::RepositoryError,
};
use metrics::counter;
use std::sync::Arc;
use tracing::{debug, info};

/// 司机可见性与位置追踪用例
pub struct TrackingUseCase<UR, RR, SR> {
    user_repo: Arc<UR>,
    route_repo: Arc<RR>,
    stop_repo: Arc<SR>,
}

impl<UR, RR, SR> TrackingUseCase<UR, RR, SR>
where
    UR: UserRepository + 'static,
    RR: RouteRepository + 'static,
    SR: StopRepository + 'static,
{
    pub fn new(user_repo: Arc<UR>, route_repo: Arc<RR>, stop_repo: Arc<SR>) -> Self {
        Self {
            user_repo,
            route_repo,
            stop_repo,
        }
    }

    /// 司机查看站点
    ///
    /// 指定 `route_id` 时只返回该路线下全部街道的站点，否则返回司机所有路线的站点。
    /// 司机或路线不存在、路线不属于该司机时返回空列表。
    pub async fn view_stops(
        &self,
        driver_id: i32,
        route_id: Option<i32>,
    ) -> Result<Vec<Stop>, UseCaseError> {
        let stops = match route_id {
            Some(route_id) => match self.route_repo.find_by_id(route_id).await? {
                Some(route) if route.is_owned_by(driver_id) => {
                    self.stop_repo.find_by_route(route_id).await?
                }
                _ => {
                    debug!(
                        "Route {} is unknown or not owned by driver {}",
                        route_id, driver_id
                    );
                    Vec::new()
                }
            },
            None => self.stop_repo.find_by_driver(driver_id).await?,
        };

        Ok(stops)
    }

    /// 居民查看司机信息
    ///
    /// 司机信息是公开的：不指定 `driver_id` 时返回全部司机
    pub async fn view_driver(
        &self,
        resident_id: i32,
        driver_id: Option<i32>,
    ) -> Result<Vec<Driver>, UseCaseError> {
        debug!("Resident {} viewing drivers", resident_id);

        match driver_id {
            Some(driver_id) => {
                let driver = self.load_driver(driver_id).await?;
                Ok(vec![driver])
            }
            None => Ok(self.user_repo.list_drivers().await?),
        }
    }

    /// 居民追踪司机
    ///
    /// 任何居民都可以追踪任何司机
    ///
    /// # 返回值
    ///
    /// * `Ok(DriverTracking)` - 司机、最后已知坐标、路线标签以及进行中的路线
    /// * `Err(UseCaseError::NotFound)` - 司机不存在
    pub async fn track_driver(
        &self,
        resident_id: i32,
        driver_id: i32,
    ) -> Result<DriverTracking, UseCaseError> {
        let driver = self.load_driver(driver_id).await?;
        let active_routes = self
            .route_repo
            .find_by_driver_and_status(driver_id, RouteStatus::Active)
            .await?;

        debug!(
            "Resident {} tracking driver {} ({} active routes)",
            resident_id,
            driver_id,
            active_routes.len()
        );

        Ok(DriverTracking::new(driver, active_routes))
    }

    /// 覆盖司机的最后已知坐标
    ///
    /// 不做范围校验，也不记录历史
    pub async fn update_driver_location(
        &self,
        driver_id: i32,
        lat: f64,
        lng: f64,
    ) -> Result<Driver, UseCaseError> {
        let driver = self
            .user_repo
            .update_driver_location(driver_id, lat, lng)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UseCaseError::not_found("Driver", driver_id),
                other => other.into(),
            })?;

        counter!("driver_location_updates_total").increment(1);
        info!("Driver {} location set to ({}, {})", driver_id, lat, lng);

        Ok(driver)
    }

    async fn load_driver(&self, driver_id: i32) -> Result<Driver, UseCaseError> {
        self.user_repo
            .find_driver(driver_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Driver", driver_id))
    }
}
