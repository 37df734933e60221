// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::status::{DomainError, RouteStatus};

/// 路线实体
///
/// 一名司机在某个日期、某个时刻执行的一次收运，由若干街道组成。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// 路线唯一标识符
    #[serde(rename = "routeID")]
    pub id: i32,
    /// 所属司机ID
    #[serde(rename = "driverID")]
    pub driver_id: i32,
    /// 执行日期（ISO 8601 `YYYY-MM-DD`）
    #[serde(rename = "driveDate")]
    pub drive_date: NaiveDate,
    /// 出发时间（ISO 8601 `HH:MM:SS`）
    #[serde(rename = "driveTime")]
    pub drive_time: NaiveTime,
    /// 路线状态
    pub status: RouteStatus,
}

/// 待创建的路线
#[derive(Debug, Clone)]
pub struct NewRoute {
    pub driver_id: i32,
    pub drive_date: NaiveDate,
    pub drive_time: NaiveTime,
}

impl Route {
    /// 判断路线是否属于指定司机
    pub fn is_owned_by(&self, driver_id: i32) -> bool {
        self.driver_id == driver_id
    }

    /// 变更路线状态
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 转换合法且已应用
    /// * `Err(DomainError)` - 状态机中不存在该转换，状态保持不变
    pub fn change_status(&mut self, next: RouteStatus) -> Result<(), DomainError> {
        self.status = self.status.transition_to(next)?;
        Ok(())
    }
}
