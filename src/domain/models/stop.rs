// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::status::{DomainError, StopStatus};

/// 站点实体
///
/// 居民请求在某条街道、某个时刻被服务，拥有独立于路线的状态。
/// 只能通过状态转换修改，不会更换所属街道或居民。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stop {
    /// 站点唯一标识符
    #[serde(rename = "stopID")]
    pub id: i32,
    /// 请求该站点的居民ID
    #[serde(rename = "residentID")]
    pub resident_id: i32,
    /// 所在街道ID
    #[serde(rename = "streetID")]
    pub street_id: i32,
    /// 期望时间
    #[serde(rename = "stopTime")]
    pub stop_time: NaiveTime,
    /// 站点状态
    #[serde(rename = "stopStatus")]
    pub status: StopStatus,
}

/// 待创建的站点
#[derive(Debug, Clone)]
pub struct NewStop {
    pub resident_id: i32,
    pub street_id: i32,
    pub stop_time: NaiveTime,
}

impl Stop {
    pub fn is_owned_by(&self, resident_id: i32) -> bool {
        self.resident_id == resident_id
    }

    /// 是否仍占用 (居民, 街道) 的唯一名额
    pub fn is_open(&self) -> bool {
        self.status != StopStatus::Cancelled
    }

    /// 司机确认站点
    ///
    /// 将站点状态从Requested变更为Confirmed
    pub fn confirm(mut self) -> Result<Self, DomainError> {
        self.advance(StopStatus::Confirmed)?;
        Ok(self)
    }

    /// 完成站点
    ///
    /// 将站点状态从Confirmed变更为Completed
    pub fn complete(mut self) -> Result<Self, DomainError> {
        self.advance(StopStatus::Completed)?;
        Ok(self)
    }

    /// 取消站点
    ///
    /// 仅 Requested / Confirmed 可以取消，终态不可变
    ///
    /// # 返回值
    ///
    /// * `Ok(Stop)` - 已取消的站点
    /// * `Err(DomainError::NotCancellable)` - 站点已处于终态
    pub fn cancel(mut self) -> Result<Self, DomainError> {
        if !self.status.can_transition_to(StopStatus::Cancelled) {
            return Err(DomainError::NotCancellable("Stop"));
        }
        self.status = StopStatus::Cancelled;
        Ok(self)
    }

    fn advance(&mut self, next: StopStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::InvalidStateTransition {
                entity: "Stop",
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        self.status = next;
        Ok(())
    }
}
