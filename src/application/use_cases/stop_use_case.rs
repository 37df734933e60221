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
    application::use_cases::error::UseCaseError,
    domain::{
        models::{
            status::{DomainError, StopStatus},
            stop::{NewStop, Stop},
        },
        repositories::{
            route_repository::RouteRepository, stop_repository::StopRepository,
            street_repository::StreetRepository, user_repository::UserRepository,
        },
    },
};
use chrono::NaiveTime;
use metrics::counter;
use std::sync::Arc;
use tracing::{info, warn};

/// 站点请求用例
///
/// 居民申请与取消站点，司机确认与完成自己路线上的站点
pub struct StopUseCase<SR, STR, RR, UR> {
    stop_repo: Arc<SR>,
    street_repo: Arc<STR>,
    route_repo: Arc<RR>,
    user_repo: Arc<UR>,
}

impl<SR, STR, RR, UR> StopUseCase<SR, STR, RR, UR>
where
    SR: StopRepository + 'static,
    STR: StreetRepository + 'static,
    RR: RouteRepository + 'static,
    UR: UserRepository + 'static,
{
    pub fn new(
        stop_repo: Arc<SR>,
        street_repo: Arc<STR>,
        route_repo: Arc<RR>,
        user_repo: Arc<UR>,
    ) -> Self {
        Self {
            stop_repo,
            street_repo,
            route_repo,
            user_repo,
        }
    }

    /// 居民在街道上申请站点
    ///
    /// 同一居民在同一街道上最多只有一个未取消的站点
    ///
    /// # 参数
    ///
    /// * `resident_id` - 申请的居民
    /// * `street_id` - 目标街道
    /// * `stop_time` - 期望的到达时间
    ///
    /// # 返回值
    ///
    /// * `Ok(Stop)` - 新站点，状态为 requested
    /// * `Err(UseCaseError::Conflict)` - 已存在未取消的站点，不会新建记录
    /// * `Err(UseCaseError::NotFound)` - 居民或街道不存在
    pub async fn request_stop(
        &self,
        resident_id: i32,
        street_id: i32,
        stop_time: NaiveTime,
    ) -> Result<Stop, UseCaseError> {
        if self.user_repo.find_resident(resident_id).await?.is_none() {
            return Err(UseCaseError::not_found("Resident", resident_id));
        }
        if self.street_repo.find_by_id(street_id).await?.is_none() {
            return Err(UseCaseError::not_found("Street", street_id));
        }

        if let Some(existing) = self
            .stop_repo
            .find_open_by_resident_and_street(resident_id, street_id)
            .await?
        {
            warn!(
                "Resident {} already holds stop {} on street {}",
                resident_id, existing.id, street_id
            );
            return Err(UseCaseError::conflict(
                "Stop already requested for this street",
            ));
        }

        let stop = self
            .stop_repo
            .create(&NewStop {
                resident_id,
                street_id,
                stop_time,
            })
            .await?;

        counter!("stops_requested_total").increment(1);
        info!(
            "Resident {} requested stop {} on street {} at {}",
            resident_id, stop.id, street_id, stop_time
        );

        Ok(stop)
    }

    /// 居民取消自己的站点
    ///
    /// 仅 requested / confirmed 可以取消；重复取消返回冲突而不是再次取消
    pub async fn cancel_stop(&self, resident_id: i32, stop_id: i32) -> Result<Stop, UseCaseError> {
        let stop = self.load_stop(stop_id).await?;

        if !stop.is_owned_by(resident_id) {
            warn!(
                "Resident {} attempted to cancel stop {} owned by resident {}",
                resident_id, stop_id, stop.resident_id
            );
            return Err(UseCaseError::NotPermitted);
        }

        let from = stop.status;
        let cancelled = stop.cancel()?;
        let stop = self
            .stop_repo
            .update_status(cancelled.id, from, cancelled.status)
            .await?
            .ok_or_else(|| {
                warn!("Stop {} changed status before it could be cancelled", stop_id);
                UseCaseError::from(DomainError::NotCancellable("Stop"))
            })?;

        counter!("stops_cancelled_total").increment(1);
        info!("Resident {} cancelled stop {}", resident_id, stop_id);

        Ok(stop)
    }

    /// 司机确认自己路线上的站点（requested → confirmed）
    pub async fn confirm_stop(&self, driver_id: i32, stop_id: i32) -> Result<Stop, UseCaseError> {
        let stop = self.load_driver_stop(driver_id, stop_id).await?;
        let from = stop.status;
        let confirmed = stop.confirm()?;

        let stop = match self
            .stop_repo
            .update_status(confirmed.id, from, confirmed.status)
            .await?
        {
            Some(stop) => stop,
            None => return Err(self.stale_transition(stop_id, confirmed.status).await),
        };
        info!("Driver {} confirmed stop {}", driver_id, stop_id);

        Ok(stop)
    }

    /// 司机完成自己路线上的站点（confirmed → completed）
    pub async fn complete_stop(&self, driver_id: i32, stop_id: i32) -> Result<Stop, UseCaseError> {
        let stop = self.load_driver_stop(driver_id, stop_id).await?;
        let from = stop.status;
        let completed = stop.complete()?;

        let stop = match self
            .stop_repo
            .update_status(completed.id, from, completed.status)
            .await?
        {
            Some(stop) => stop,
            None => return Err(self.stale_transition(stop_id, completed.status).await),
        };
        info!("Driver {} completed stop {}", driver_id, stop_id);

        Ok(stop)
    }

    /// 状态更新未命中时，按站点当前状态报告冲突
    async fn stale_transition(&self, stop_id: i32, to: StopStatus) -> UseCaseError {
        match self.load_stop(stop_id).await {
            Ok(current) => {
                warn!(
                    "Stop {} moved to {} before it could become {}",
                    stop_id, current.status, to
                );
                DomainError::InvalidStateTransition {
                    entity: "Stop",
                    from: current.status.to_string(),
                    to: to.to_string(),
                }
                .into()
            }
            Err(err) => err,
        }
    }

    async fn load_stop(&self, stop_id: i32) -> Result<Stop, UseCaseError> {
        self.stop_repo
            .find_by_id(stop_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Stop", stop_id))
    }

    /// 加载站点并确认它位于该司机的路线上（站点 → 街道 → 路线）
    async fn load_driver_stop(&self, driver_id: i32, stop_id: i32) -> Result<Stop, UseCaseError> {
        let stop = self.load_stop(stop_id).await?;

        let street = self
            .street_repo
            .find_by_id(stop.street_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Street", stop.street_id))?;
        let route = self
            .route_repo
            .find_by_id(street.route_id)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Route", street.route_id))?;

        if !route.is_owned_by(driver_id) {
            warn!(
                "Driver {} attempted to progress stop {} on route {} owned by driver {}",
                driver_id, stop_id, route.id, route.driver_id
            );
            return Err(UseCaseError::NotPermitted);
        }

        Ok(stop)
    }
}
